//! Main application configuration

use serde::{Deserialize, Serialize};

use super::injector::InjectorConfig;
use super::logging::LoggingConfig;

/// Root configuration document
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [injector]
/// namespaces = ["Billing", "Shipping"]
///
/// [injector.aliases]
/// mailer = "smtp_mailer"
///
/// [injector.values]
/// retry_limit = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Initial injector configuration
    pub injector: InjectorConfig,
}
