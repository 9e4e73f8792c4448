//! Type registry port

use std::sync::Arc;

use crate::value_objects::TypeDescriptor;

/// Lookup of constructible types by fully-qualified name
///
/// Implementations are explicit registration tables populated at startup or
/// at compile time. Names use `::` between namespace components.
pub trait TypeRegistry: Send + Sync {
    /// Descriptor registered under exactly `qualified_name`
    fn lookup(&self, qualified_name: &str) -> Option<Arc<TypeDescriptor>>;

    /// Every registered name, sorted
    fn type_names(&self) -> Vec<String>;
}
