//! Injector configuration registries
//!
//! [`Settings`] holds the four independent registries an injector consults:
//! aliases, pre-built values, zero-argument factories and namespaces.
//! The same type describes both the live configuration of an injector and
//! the additions passed to `configure` or to a per-request override.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::value_objects::identifier::Identifier;
use crate::value_objects::service::{Factory, Service, service};

/// Aliases, values, factories and namespaces for an injector
#[derive(Clone, Default)]
pub struct Settings {
    aliases: HashMap<String, String>,
    values: HashMap<String, Service>,
    factories: HashMap<String, Factory>,
    namespaces: Vec<String>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `from` to `to` before cache lookup and resolver dispatch
    pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Register a pre-built value, wrapping it as a [`Service`]
    pub fn value<T: Any + Send + Sync>(self, identifier: impl Into<String>, value: T) -> Self {
        self.shared_value(identifier, service(value))
    }

    /// Register a pre-built [`Service`] as-is, keeping its identity
    pub fn shared_value(mut self, identifier: impl Into<String>, value: Service) -> Self {
        self.values.insert(identifier.into(), value);
        self
    }

    /// Register a zero-argument producer
    pub fn factory<T, F>(self, identifier: impl Into<String>, produce: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.factory_entry(identifier, Factory::new(produce))
    }

    /// Register an already-built [`Factory`]
    pub fn factory_entry(mut self, identifier: impl Into<String>, factory: Factory) -> Self {
        self.factories.insert(identifier.into(), factory);
        self
    }

    /// Append a namespace to the type search path
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        push_unique(&mut self.namespaces, namespace.into());
        self
    }

    /// Append several namespaces, in order
    pub fn namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for namespace in namespaces {
            push_unique(&mut self.namespaces, namespace.into());
        }
        self
    }

    /// Configured aliases
    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }

    /// Configured values
    pub fn values(&self) -> &HashMap<String, Service> {
        &self.values
    }

    /// Configured factories
    pub fn factories(&self) -> &HashMap<String, Factory> {
        &self.factories
    }

    /// Configured namespaces in search order
    pub fn namespace_list(&self) -> &[String] {
        &self.namespaces
    }

    /// Alias target for `identifier`, if one is configured
    pub fn alias_for(&self, identifier: &str) -> Option<&str> {
        self.aliases.get(identifier).map(String::as_str)
    }

    /// Whether no category holds any entry
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
            && self.values.is_empty()
            && self.factories.is_empty()
            && self.namespaces.is_empty()
    }

    /// Check that every key, alias target and namespace is well formed
    pub fn validate(&self) -> Result<()> {
        for (from, to) in &self.aliases {
            check_identifier("aliases", from)?;
            if !Identifier::is_valid(to) {
                return Err(Error::configuration(format!(
                    "aliases: target of '{from}' must be a non-blank identifier"
                )));
            }
        }
        for key in self.values.keys() {
            check_identifier("values", key)?;
        }
        for key in self.factories.keys() {
            check_identifier("factories", key)?;
        }
        if self.namespaces.iter().any(|ns| ns.trim().is_empty()) {
            return Err(Error::configuration(
                "namespaces: entries must be non-blank names",
            ));
        }
        Ok(())
    }

    /// Merge `other` into `self`
    ///
    /// Mapping categories merge key-wise with `other` winning on conflicts.
    /// Namespaces are appended, keeping the first occurrence of each name.
    pub fn merge(&mut self, other: Settings) {
        self.aliases.extend(other.aliases);
        self.values.extend(other.values);
        self.factories.extend(other.factories);
        for namespace in other.namespaces {
            push_unique(&mut self.namespaces, namespace);
        }
    }

    /// Copy of `self` with `other` merged in
    pub fn merged(&self, other: Settings) -> Settings {
        let mut copy = self.clone();
        copy.merge(other);
        copy
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values: Vec<&String> = self.values.keys().collect();
        values.sort();
        let mut factories: Vec<&String> = self.factories.keys().collect();
        factories.sort();
        f.debug_struct("Settings")
            .field("aliases", &self.aliases)
            .field("values", &values)
            .field("factories", &factories)
            .field("namespaces", &self.namespaces)
            .finish()
    }
}

fn push_unique(namespaces: &mut Vec<String>, namespace: String) {
    if !namespaces.contains(&namespace) {
        namespaces.push(namespace);
    }
}

fn check_identifier(category: &str, key: &str) -> Result<()> {
    if Identifier::is_valid(key) {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "{category}: keys must be non-blank identifiers, got {key:?}"
        )))
    }
}
