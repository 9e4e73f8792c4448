//! Type resolver

use ruse_domain::{Error, Identifier, Result, Service, ServiceResolver};
use tracing::trace;

use super::Resolver;
use crate::di::locator::TypeLocator;
use crate::di::object_builder::ObjectBuilder;

/// Locates a registered type for the identifier and constructs it
#[derive(Debug, Clone)]
pub struct TypeResolver {
    locator: TypeLocator,
    builder: ObjectBuilder,
}

impl TypeResolver {
    /// Create a resolver searching through `locator`
    pub fn new(locator: TypeLocator) -> Self {
        Self {
            locator,
            builder: ObjectBuilder::new(),
        }
    }

    /// The locator used to find types
    pub fn locator(&self) -> &TypeLocator {
        &self.locator
    }
}

impl Resolver for TypeResolver {
    fn name(&self) -> &'static str {
        "type"
    }

    fn can_build(&self, identifier: &Identifier) -> bool {
        self.locator.locate(identifier.as_str()).is_some()
    }

    fn build(&self, identifier: &Identifier, resolver: &dyn ServiceResolver) -> Result<Service> {
        let descriptor = self
            .locator
            .locate(identifier.as_str())
            .ok_or_else(|| Error::unknown_service(identifier.as_str()))?;
        trace!(
            identifier = %identifier,
            type_name = descriptor.name(),
            "Located type"
        );
        self.builder.build(&descriptor, resolver)
    }
}
