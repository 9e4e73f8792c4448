//! Injector - the resolution entry point
//!
//! ## Pattern
//!
//! ```text
//! get(identifier[, overrides])
//!     │  overrides? ──► child(overrides).get(identifier)
//!     ▼
//! alias rewrite (one level) ──► cache hit? ──► return
//!     │
//!     ▼
//! in-flight check ──► resolver chain: value → factory → type ──► cache ──► return
//! ```
//!
//! Each injector caches every service it builds, so repeated requests for
//! one identifier return the same instance for the injector's lifetime.
//!
//! ## Threading
//!
//! An injector keeps its cache and in-flight state behind `RefCell`s and is
//! therefore not `Sync`. Sharing one across threads requires wrapping it in
//! external synchronization such as a `Mutex`.

use std::any::{Any, type_name};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ruse_application::TypeCatalog;
use ruse_domain::{
    Error, Identifier, IntoIdentifier, Result, Service, ServiceResolver, Settings, TypeRegistry,
    downcast,
};
use tracing::{debug, trace};

use super::in_flight::InFlight;
use super::resolvers::ResolverChain;

/// Resolves identifiers to services, caching one instance per identifier
pub struct Injector {
    registry: Arc<dyn TypeRegistry>,
    settings: Settings,
    cache: RefCell<HashMap<Identifier, Service>>,
    chain: RefCell<Option<Arc<ResolverChain>>>,
    in_flight: InFlight,
}

impl Injector {
    /// Create an empty injector locating types in `registry`
    pub fn new(registry: Arc<dyn TypeRegistry>) -> Self {
        Self {
            registry,
            settings: Settings::new(),
            cache: RefCell::new(HashMap::new()),
            chain: RefCell::new(None),
            in_flight: InFlight::new(),
        }
    }

    /// Create an injector and apply an initial configuration
    pub fn with_settings(registry: Arc<dyn TypeRegistry>, settings: Settings) -> Result<Self> {
        let mut injector = Self::new(registry);
        injector.configure(settings)?;
        Ok(injector)
    }

    /// Merge `settings` into the current configuration
    ///
    /// Mapping categories merge key-wise, later entries winning; namespaces
    /// append without duplicates. Nothing is merged when validation fails.
    /// Services already cached stay cached.
    pub fn configure(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        debug!(settings = ?settings, "Configuring injector");
        self.settings.merge(settings);
        *self.chain.get_mut() = None;
        Ok(())
    }

    /// Resolve `identifier` to a service
    ///
    /// # Errors
    ///
    /// * `InvalidIdentifier` - the identifier is absent or blank
    /// * `UnknownService` - no resolver can build it, or a required
    ///   constructor parameter cannot be resolved
    /// * `CircularDependency` - it was requested again while being resolved
    pub fn get<I: IntoIdentifier>(&self, identifier: I) -> Result<Service> {
        let identifier = identifier.into_identifier()?;
        self.resolve_identifier(&identifier)
    }

    /// Resolve `identifier` with per-request configuration additions
    ///
    /// Resolution happens in a child injector holding a copy of this
    /// configuration with `overrides` merged in and an empty cache. The
    /// child is discarded afterwards; this injector is left untouched.
    pub fn get_with<I: IntoIdentifier>(
        &self,
        identifier: I,
        overrides: Settings,
    ) -> Result<Service> {
        let identifier = identifier.into_identifier()?;
        let child = self.child(overrides)?;
        debug!(identifier = %identifier, "Resolving with request-specific configuration");
        child.resolve_identifier(&identifier)
    }

    /// Resolve `identifier` and downcast it to `T`
    pub fn get_as<T, I>(&self, identifier: I) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
        I: IntoIdentifier,
    {
        let identifier = identifier.into_identifier()?;
        let service = self.resolve_identifier(&identifier)?;
        downcast::<T>(&service)
            .ok_or_else(|| Error::type_mismatch(identifier.as_str(), type_name::<T>()))
    }

    /// Whether `identifier` can be resolved, without building anything
    ///
    /// Invalid identifiers yield `false`. Aliases apply as in [`Injector::get`];
    /// the cache is not consulted.
    pub fn can_resolve<I: IntoIdentifier>(&self, identifier: I) -> bool {
        identifier
            .into_identifier()
            .is_ok_and(|identifier| self.can_resolve_identifier(&identifier))
    }

    /// Isolated child context with `overrides` merged into a copy of the configuration
    pub fn child(&self, overrides: Settings) -> Result<Injector> {
        overrides.validate()?;
        let mut child = Injector::new(Arc::clone(&self.registry));
        child.settings = self.settings.merged(overrides);
        Ok(child)
    }

    /// Current configuration
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registry types are located in
    pub fn registry(&self) -> &Arc<dyn TypeRegistry> {
        &self.registry
    }

    /// Whether a service is cached under exactly `identifier`, without alias rewriting
    pub fn is_cached(&self, identifier: &str) -> bool {
        self.cache.borrow().contains_key(identifier)
    }

    /// Number of cached services
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    fn resolve_identifier(&self, identifier: &Identifier) -> Result<Service> {
        let identifier = self.dealias(identifier)?;

        if let Some(service) = self.cache.borrow().get(&identifier) {
            trace!(identifier = %identifier, "Cache hit");
            return Ok(Arc::clone(service));
        }

        let _guard = self.in_flight.enter(&identifier)?;
        let chain = self.chain();
        let resolver = chain
            .find(&identifier)
            .ok_or_else(|| Error::unknown_service(identifier.as_str()))?;

        let service = resolver.build(&identifier, self)?;
        debug!(
            identifier = %identifier,
            resolver = resolver.name(),
            depth = self.in_flight.depth(),
            "Resolved service"
        );
        self.cache
            .borrow_mut()
            .insert(identifier, Arc::clone(&service));
        Ok(service)
    }

    fn can_resolve_identifier(&self, identifier: &Identifier) -> bool {
        self.dealias(identifier)
            .is_ok_and(|identifier| self.chain().can_build(&identifier))
    }

    /// Apply the alias map once; targets are not rewritten again
    fn dealias(&self, identifier: &Identifier) -> Result<Identifier> {
        match self.settings.alias_for(identifier.as_str()) {
            Some(target) => {
                trace!(from = %identifier, to = target, "Alias rewrite");
                Identifier::new(target)
            }
            None => Ok(identifier.clone()),
        }
    }

    /// Resolver chain for the current configuration, built on first use
    fn chain(&self) -> Arc<ResolverChain> {
        let mut slot = self.chain.borrow_mut();
        let chain = slot.get_or_insert_with(|| {
            trace!("Building resolver chain");
            Arc::new(ResolverChain::from_settings(
                &self.settings,
                Arc::clone(&self.registry),
            ))
        });
        Arc::clone(chain)
    }
}

impl ServiceResolver for Injector {
    fn resolve(&self, identifier: &Identifier) -> Result<Service> {
        self.resolve_identifier(identifier)
    }

    fn can_resolve(&self, identifier: &Identifier) -> bool {
        self.can_resolve_identifier(identifier)
    }
}

impl Default for Injector {
    /// Injector over every type submitted to the compile-time registry
    fn default() -> Self {
        Self::new(Arc::new(TypeCatalog::linked()))
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("settings", &self.settings)
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}
