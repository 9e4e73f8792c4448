//! Recursive resolution port

use crate::error::Result;
use crate::value_objects::{Identifier, Service};

/// Resolution entry point handed to object builders
///
/// Building one object may require resolving its dependencies through the
/// same injector, with the same aliases, cache and cycle tracking.
pub trait ServiceResolver {
    /// Resolve `identifier`, failing with `UnknownService` when nothing can build it
    fn resolve(&self, identifier: &Identifier) -> Result<Service>;

    /// Whether `identifier` could be resolved, without building it
    fn can_resolve(&self, identifier: &Identifier) -> bool;
}
