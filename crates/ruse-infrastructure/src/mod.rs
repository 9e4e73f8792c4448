//! # Infrastructure Layer
//!
//! The resolution engine plus the technical concerns around it.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Injector, resolver chain, type locator and object builder |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, InjectorConfig, LoggingConfig};
pub use di::{Injector, ObjectBuilder, TypeLocator, classify};
pub use error_ext::ErrorContext;
