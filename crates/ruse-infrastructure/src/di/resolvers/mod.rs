//! Resolver chain
//!
//! Three strategies, always queried in this order:
//!
//! | Resolver | Builds identifiers that are |
//! |----------|-----------------------------|
//! | [`ValueResolver`] | keys of the configured values |
//! | [`FactoryResolver`] | keys of the configured factories |
//! | [`TypeResolver`] | classifiable to a registered type |
//!
//! The first resolver whose `can_build` holds produces the service.

pub mod factory;
pub mod type_resolver;
pub mod value;

use std::fmt;
use std::sync::Arc;

use ruse_domain::{Identifier, Result, Service, ServiceResolver, Settings, TypeRegistry};

pub use factory::FactoryResolver;
pub use type_resolver::TypeResolver;
pub use value::ValueResolver;

use crate::di::locator::TypeLocator;

/// A strategy able to produce services for the identifiers it recognizes
///
/// A resolver either builds successfully or reports through `can_build`
/// that it cannot; `build` is only called after `can_build` returned true.
pub trait Resolver: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this resolver recognizes `identifier`
    fn can_build(&self, identifier: &Identifier) -> bool;

    /// Produce the service, resolving dependencies through `resolver`
    fn build(&self, identifier: &Identifier, resolver: &dyn ServiceResolver) -> Result<Service>;
}

/// Ordered resolvers built from one configuration snapshot
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChain {
    /// Build the value, factory and type resolvers from `settings`
    pub fn from_settings(settings: &Settings, registry: Arc<dyn TypeRegistry>) -> Self {
        let locator = TypeLocator::new(registry, settings.namespace_list().to_vec());
        Self::new(vec![
            Box::new(ValueResolver::new(settings.values().clone())),
            Box::new(FactoryResolver::new(settings.factories().clone())),
            Box::new(TypeResolver::new(locator)),
        ])
    }

    /// Chain over explicit resolvers, queried in the given order
    pub fn new(resolvers: Vec<Box<dyn Resolver>>) -> Self {
        Self { resolvers }
    }

    /// First resolver able to build `identifier`
    pub fn find(&self, identifier: &Identifier) -> Option<&dyn Resolver> {
        self.resolvers
            .iter()
            .map(|resolver| &**resolver)
            .find(|resolver| resolver.can_build(identifier))
    }

    /// Whether any resolver can build `identifier`
    pub fn can_build(&self, identifier: &Identifier) -> bool {
        self.find(identifier).is_some()
    }

    /// Resolver names in query order
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|resolver| resolver.name()).collect()
    }
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.names())
            .finish()
    }
}
