//! # Ruse Domain
//!
//! Core types of the Ruse resolution engine: identifiers, configuration
//! registries, constructor descriptors, the resolution error taxonomy, and
//! the ports the engine consumes.

/// Naming constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ServiceResolver, TypeRegistry};
pub use value_objects::*;
