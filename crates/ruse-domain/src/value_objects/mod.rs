//! Domain Value Objects
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Identifier`] | Validated key used to request a service |
//! | [`Service`] | Opaque resolved payload shared by identity |
//! | [`Factory`] | Zero-argument producer for deferred values |
//! | [`Settings`] | Aliases, values, factories and namespaces |
//! | [`TypeDescriptor`] | Constructible type with its parameter list |

/// Service identifiers
pub mod identifier;
/// Resolved payloads and factories
pub mod service;
/// Injector configuration registries
pub mod settings;
/// Constructor descriptors
pub mod type_descriptor;

pub use identifier::{Identifier, IntoIdentifier};
pub use service::{Factory, Service, downcast, same_service, service};
pub use settings::Settings;
pub use type_descriptor::{
    Argument, Arguments, Parameter, ParameterKind, TypeDescriptor, TypeDescriptorBuilder,
};
