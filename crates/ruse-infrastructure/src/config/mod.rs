//! Configuration
//!
//! TOML files and environment variables merged with Figment, deserialized
//! into [`AppConfig`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, InjectorConfig, LoggingConfig};
