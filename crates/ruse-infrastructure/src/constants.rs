//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Naming constants shared with the registry live in `ruse_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ruse.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ruse";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RUSE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "RUSE_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "ruse";
