//! Resolved service payloads and zero-argument factories

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque value produced by an injector
///
/// Two services are the same instance when [`same_service`] holds for them.
pub type Service = Arc<dyn Any + Send + Sync>;

/// Wrap a concrete value as a [`Service`]
pub fn service<T: Any + Send + Sync>(value: T) -> Service {
    Arc::new(value)
}

/// Downcast a service to its concrete type, sharing the same allocation
pub fn downcast<T: Any + Send + Sync>(service: &Service) -> Option<Arc<T>> {
    Arc::clone(service).downcast::<T>().ok()
}

/// Identity comparison between two services
pub fn same_service(a: &Service, b: &Service) -> bool {
    Arc::ptr_eq(a, b)
}

type ProduceFn = dyn Fn() -> Service + Send + Sync;

/// Zero-argument producer registered under an identifier
///
/// The injector invokes a factory at most once per identifier and caches
/// the result, so a factory may close over state that changes between
/// configuration and first resolution.
#[derive(Clone)]
pub struct Factory(Arc<ProduceFn>);

impl Factory {
    /// Build a factory from a closure returning a concrete value
    pub fn new<T, F>(produce: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self(Arc::new(move || service(produce())))
    }

    /// Build a factory from a closure that already returns a [`Service`]
    pub fn from_service_fn<F>(produce: F) -> Self
    where
        F: Fn() -> Service + Send + Sync + 'static,
    {
        Self(Arc::new(produce))
    }

    /// Invoke the producer
    pub fn produce(&self) -> Service {
        (self.0)()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}
