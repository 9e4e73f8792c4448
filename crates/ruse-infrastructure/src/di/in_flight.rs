//! In-flight identifier tracking
//!
//! Records which identifiers are being resolved but not yet cached. Entering
//! an identifier that is already in flight is a dependency cycle.

use std::cell::RefCell;

use ruse_domain::{Error, Identifier, Result};
use tracing::warn;

/// Stack of identifiers currently being resolved
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    stack: RefCell<Vec<Identifier>>,
}

impl InFlight {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark `identifier` as in flight until the returned guard drops
    pub(crate) fn enter(&self, identifier: &Identifier) -> Result<InFlightGuard<'_>> {
        let mut stack = self.stack.borrow_mut();
        if let Some(start) = stack.iter().position(|entry| entry == identifier) {
            let chain: Vec<String> = stack[start..]
                .iter()
                .chain(std::iter::once(identifier))
                .map(ToString::to_string)
                .collect();
            warn!(identifier = %identifier, chain = ?chain, "Circular dependency detected");
            return Err(Error::circular_dependency(identifier.as_str(), chain));
        }
        stack.push(identifier.clone());
        Ok(InFlightGuard { stack: &self.stack })
    }

    /// Number of identifiers currently in flight
    pub(crate) fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

/// Removes its identifier from the in-flight stack when dropped
#[derive(Debug)]
pub(crate) struct InFlightGuard<'a> {
    stack: &'a RefCell<Vec<Identifier>>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}
