//! Injector configuration types
//!
//! The data-only form of [`Settings`]: aliases, JSON values and namespaces.
//! Factories are closures and can only be supplied in code.

use std::collections::BTreeMap;
use std::sync::Arc;

use ruse_domain::{Error, Result, Service, Settings};
use serde::{Deserialize, Serialize};

/// Category name that only exists in code
const FACTORIES_KEY: &str = "factories";

/// Injector settings as they appear in configuration files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectorConfig {
    /// Identifier rewrites
    pub aliases: BTreeMap<String, String>,

    /// Pre-built values, resolved as `serde_json::Value` services
    pub values: BTreeMap<String, serde_json::Value>,

    /// Namespaces searched for types, in order
    pub namespaces: Vec<String>,
}

impl InjectorConfig {
    /// Parse an untyped settings document
    ///
    /// Unknown categories and wrongly shaped categories are configuration
    /// errors, as is a `factories` entry.
    pub fn from_json(document: serde_json::Value) -> Result<Self> {
        if document.get(FACTORIES_KEY).is_some() {
            return Err(Error::configuration(
                "factories: producers cannot be supplied as data; register them in code",
            ));
        }
        serde_json::from_value(document)
            .map_err(|e| Error::configuration_with_source("Invalid injector settings", e))
    }

    /// Convert into [`Settings`]
    pub fn to_settings(&self) -> Settings {
        let settings = self
            .aliases
            .iter()
            .fold(Settings::new(), |settings, (from, to)| {
                settings.alias(from.as_str(), to.as_str())
            });
        let settings = self
            .values
            .iter()
            .fold(settings, |settings, (identifier, value)| {
                let value: Service = Arc::new(value.clone());
                settings.shared_value(identifier.as_str(), value)
            });
        settings.namespaces(self.namespaces.iter().cloned())
    }

    /// Check identifiers and namespaces
    pub fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }

    /// Whether every category is empty
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.values.is_empty() && self.namespaces.is_empty()
    }
}
