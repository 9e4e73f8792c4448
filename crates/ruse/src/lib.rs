//! # Ruse
//!
//! Runtime dependency resolution: ask an [`Injector`] for a service by a
//! textual identifier and it returns a configured value, the product of a
//! registered factory, or a freshly constructed instance of a registered
//! type whose constructor dependencies were resolved the same way.
//!
//! ## Example
//!
//! ```
//! use ruse::{Arguments, Injector, Settings, TypeCatalog, TypeDescriptor};
//! use std::sync::Arc;
//!
//! struct Mailer {
//!     host: Arc<String>,
//! }
//!
//! let catalog = TypeCatalog::new().with(
//!     TypeDescriptor::builder("Mailer")
//!         .required("smtp_host")
//!         .build(|args: Arguments| Ok(Mailer { host: args.require("smtp_host")? })),
//! );
//! let settings = Settings::new().value("smtp_host", String::from("mail.local"));
//! let injector = Injector::with_settings(Arc::new(catalog), settings).unwrap();
//!
//! let mailer = injector.get_as::<Mailer, _>("mailer").unwrap();
//! assert_eq!(mailer.host.as_str(), "mail.local");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identifiers, settings, type descriptors, errors and ports
//! - `application` - type registration tables
//! - `infrastructure` - the injector, configuration loading and logging

/// Domain layer - core types and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ruse_domain::*;
}

/// Application layer - type registration
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ruse_application::*;
}

/// Infrastructure layer - resolution engine, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ruse_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export registration and the engine entry point
pub use application::{TYPE_REGISTRATIONS, TypeCatalog, TypeEntry, list_registered_types};
pub use infrastructure::{AppConfig, ConfigLoader, Injector};

// Re-export for `#[linkme::distributed_slice(ruse::TYPE_REGISTRATIONS)]`
pub use linkme;

use std::sync::Arc;
use tracing::debug;

/// Create an injector over every linked type registration
///
/// Applies `settings` as the initial configuration when given.
pub fn create_injector(settings: Option<Settings>) -> Result<Injector> {
    let injector = match settings {
        Some(settings) => Injector::with_settings(Arc::new(TypeCatalog::linked()), settings)?,
        None => Injector::default(),
    };
    debug!(injector = ?injector, "Created injector");
    Ok(injector)
}

/// Create an injector configured from a loaded [`AppConfig`]
pub fn create_injector_from_config(config: &AppConfig) -> Result<Injector> {
    config.injector.validate()?;
    create_injector(Some(config.injector.to_settings()))
}
