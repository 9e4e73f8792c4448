//! Configuration types module

pub mod app;
pub mod injector;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use injector::InjectorConfig;
pub use logging::LoggingConfig;
