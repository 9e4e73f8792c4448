//! Explicit type catalog
//!
//! In-memory [`TypeRegistry`] keyed by fully-qualified name.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use ruse_domain::constants::NAMESPACE_SEPARATOR;
use ruse_domain::{TypeDescriptor, TypeRegistry};
use tracing::{debug, warn};

use super::types::TYPE_REGISTRATIONS;

/// Registration table mapping fully-qualified names to descriptors
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, Arc<TypeDescriptor>>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every compile-time registration
    pub fn linked() -> Self {
        let mut catalog = Self::new();
        for entry in TYPE_REGISTRATIONS {
            let descriptor = (entry.descriptor)();
            if descriptor.name() != entry.name {
                warn!(
                    entry = entry.name,
                    descriptor = descriptor.name(),
                    "Registered type name differs from its descriptor name; using the entry name"
                );
            }
            match catalog.types.entry(normalize(entry.name)) {
                Entry::Occupied(existing) => {
                    warn!(name = existing.key().as_str(), "Duplicate type registration ignored");
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(descriptor));
                }
            }
        }
        debug!(count = catalog.len(), "Collected linked type registrations");
        catalog
    }

    /// Register a descriptor under its own name, replacing any previous one
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Option<Arc<TypeDescriptor>> {
        let name = normalize(descriptor.name());
        let previous = self.types.insert(name.clone(), Arc::new(descriptor));
        if previous.is_some() {
            debug!(name = name.as_str(), "Replaced type registration");
        }
        previous
    }

    /// Builder-style [`TypeCatalog::register`]
    #[must_use]
    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Whether `qualified_name` is registered
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(normalize(qualified_name).as_str())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no type is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for TypeCatalog {
    fn lookup(&self, qualified_name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(normalize(qualified_name).as_str()).cloned()
    }

    fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }
}

/// `::Billing::Invoice` and `Billing::Invoice` name the same type
fn normalize(name: &str) -> String {
    name.strip_prefix(NAMESPACE_SEPARATOR)
        .unwrap_or(name)
        .to_string()
}
