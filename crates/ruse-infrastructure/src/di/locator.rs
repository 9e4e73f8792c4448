//! Type location
//!
//! Finds the constructible type for an identifier: the classified name is
//! looked up at global scope first, then under each configured namespace in
//! order. The first match wins.

use std::fmt;
use std::sync::Arc;

use ruse_domain::constants::NAMESPACE_SEPARATOR;
use ruse_domain::{TypeDescriptor, TypeRegistry};

use super::classifier::classify;

/// Namespace-aware search over a [`TypeRegistry`]
#[derive(Clone)]
pub struct TypeLocator {
    registry: Arc<dyn TypeRegistry>,
    namespaces: Vec<String>,
}

impl TypeLocator {
    /// Create a locator searching `namespaces` after the global scope
    pub fn new(registry: Arc<dyn TypeRegistry>, namespaces: Vec<String>) -> Self {
        Self {
            registry,
            namespaces,
        }
    }

    /// Locate the type for an unclassified identifier
    pub fn locate(&self, identifier: &str) -> Option<Arc<TypeDescriptor>> {
        self.locate_type(&classify(identifier))
    }

    /// Locate an already classified type name
    pub fn locate_type(&self, type_name: &str) -> Option<Arc<TypeDescriptor>> {
        self.candidates(type_name)
            .iter()
            .find_map(|candidate| self.registry.lookup(candidate))
    }

    /// Fully-qualified names tried for `type_name`, in search order
    pub fn candidates(&self, type_name: &str) -> Vec<String> {
        std::iter::once(type_name.to_string())
            .chain(
                self.namespaces
                    .iter()
                    .map(|namespace| qualify(namespace, type_name)),
            )
            .collect()
    }

    /// Namespaces searched after the global scope
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }
}

impl fmt::Debug for TypeLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeLocator")
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

fn qualify(namespace: &str, type_name: &str) -> String {
    let namespace = namespace
        .strip_suffix(NAMESPACE_SEPARATOR)
        .unwrap_or(namespace);
    format!("{namespace}{NAMESPACE_SEPARATOR}{type_name}")
}
