//! Factory resolver

use std::collections::HashMap;

use ruse_domain::{Error, Factory, Identifier, Result, Service, ServiceResolver};

use super::Resolver;

/// Invokes zero-argument factories
///
/// Each call to `build` invokes the factory; the injector's cache is what
/// keeps a factory from running twice for one identifier.
#[derive(Debug, Clone, Default)]
pub struct FactoryResolver {
    factories: HashMap<String, Factory>,
}

impl FactoryResolver {
    /// Create a resolver over a snapshot of the configured factories
    pub fn new(factories: HashMap<String, Factory>) -> Self {
        Self { factories }
    }
}

impl Resolver for FactoryResolver {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn can_build(&self, identifier: &Identifier) -> bool {
        self.factories.contains_key(identifier.as_str())
    }

    fn build(&self, identifier: &Identifier, _resolver: &dyn ServiceResolver) -> Result<Service> {
        self.factories
            .get(identifier.as_str())
            .map(Factory::produce)
            .ok_or_else(|| Error::unknown_service(identifier.as_str()))
    }
}
