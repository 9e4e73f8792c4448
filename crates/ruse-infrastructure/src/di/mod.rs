//! Resolution Engine
//!
//! Turns textual identifiers into services, constructing object graphs from
//! registered type descriptors.
//!
//! ## Architecture
//!
//! ```text
//! Injector (entry point: aliases, cache, overrides, cycle detection)
//! └── ResolverChain (rebuilt lazily after each configure)
//!     ├── ValueResolver    pre-built values
//!     ├── FactoryResolver  zero-argument producers
//!     └── TypeResolver
//!         ├── TypeLocator  classify → global scope → namespaces
//!         └── ObjectBuilder resolve parameters → construct
//! ```

pub mod classifier;
mod in_flight;
pub mod injector;
pub mod locator;
pub mod object_builder;
pub mod resolvers;

pub use classifier::classify;
pub use injector::Injector;
pub use locator::TypeLocator;
pub use object_builder::ObjectBuilder;
pub use resolvers::{FactoryResolver, Resolver, ResolverChain, TypeResolver, ValueResolver};
