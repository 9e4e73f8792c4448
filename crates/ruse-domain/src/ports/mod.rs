//! Domain Port Interfaces
//!
//! Contracts between the resolution engine and its collaborators:
//!
//! - **type_registry** - lookup of constructible types by fully-qualified name
//! - **resolution** - recursive service resolution used while building objects

/// Recursive resolution port
pub mod resolution;
/// Type registry port
pub mod type_registry;

pub use resolution::ServiceResolver;
pub use type_registry::TypeRegistry;
