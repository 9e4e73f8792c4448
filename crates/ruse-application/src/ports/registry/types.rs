//! Compile-time type registrations
//!
//! Types submit themselves to [`TYPE_REGISTRATIONS`] with
//! `#[linkme::distributed_slice]` and are discovered at runtime.

use ruse_domain::TypeDescriptor;

/// Registry entry for a constructible type
///
/// The descriptor is produced on demand because descriptors hold closures,
/// which cannot live in a static.
pub struct TypeEntry {
    /// Fully-qualified type name (e.g., "ServiceA", "Billing::Invoice")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Function producing the descriptor
    pub descriptor: fn() -> TypeDescriptor,
}

// Auto-collection via linkme distributed slices - types submit entries at compile time
#[linkme::distributed_slice]
pub static TYPE_REGISTRATIONS: [TypeEntry] = [..];

/// Find a compile-time registration by exact name
///
/// The first submitted entry wins when a name is registered twice.
pub fn find_registered_type(name: &str) -> Option<TypeDescriptor> {
    TYPE_REGISTRATIONS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| (entry.descriptor)())
}

/// List all compile-time registrations
///
/// Returns (name, description) tuples sorted by name. Useful for diagnostics.
pub fn list_registered_types() -> Vec<(&'static str, &'static str)> {
    let mut types: Vec<(&'static str, &'static str)> = TYPE_REGISTRATIONS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    types.sort_unstable();
    types.dedup_by_key(|(name, _)| *name);
    types
}
