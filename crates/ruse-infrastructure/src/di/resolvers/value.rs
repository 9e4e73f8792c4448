//! Value resolver

use std::collections::HashMap;

use ruse_domain::{Error, Identifier, Result, Service, ServiceResolver};

use super::Resolver;

/// Returns pre-built values unchanged
#[derive(Debug, Clone, Default)]
pub struct ValueResolver {
    values: HashMap<String, Service>,
}

impl ValueResolver {
    /// Create a resolver over a snapshot of the configured values
    pub fn new(values: HashMap<String, Service>) -> Self {
        Self { values }
    }
}

impl Resolver for ValueResolver {
    fn name(&self) -> &'static str {
        "value"
    }

    fn can_build(&self, identifier: &Identifier) -> bool {
        self.values.contains_key(identifier.as_str())
    }

    fn build(&self, identifier: &Identifier, _resolver: &dyn ServiceResolver) -> Result<Service> {
        self.values
            .get(identifier.as_str())
            .cloned()
            .ok_or_else(|| Error::unknown_service(identifier.as_str()))
    }
}
