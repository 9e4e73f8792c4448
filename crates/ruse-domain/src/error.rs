//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Ruse
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier was absent, empty or made only of whitespace
    #[error("Invalid identifier: {identifier:?}")]
    InvalidIdentifier {
        /// The rejected identifier text (empty for an absent identifier)
        identifier: String,
    },

    /// No resolver in the chain can build the identifier
    #[error("Unknown service: {identifier}")]
    UnknownService {
        /// The identifier that could not be resolved (after alias rewriting)
        identifier: String,
    },

    /// Identifier was requested again while its own resolution was in flight
    #[error("Circular dependency detected for '{identifier}': {}", .chain.join(" -> "))]
    CircularDependency {
        /// The re-requested identifier
        identifier: String,
        /// The cycle, from the first request of `identifier` back to it
        chain: Vec<String>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A constructor rejected the arguments it was handed
    #[error("Failed to construct {type_name}: {message}")]
    Construction {
        /// Fully-qualified name of the type being constructed
        type_name: String,
        /// Description of the failure
        message: String,
    },

    /// A resolved service was not of the requested concrete type
    #[error("Service '{identifier}' is not a {expected}")]
    TypeMismatch {
        /// The identifier that was resolved
        identifier: String,
        /// Name of the requested type
        expected: &'static str,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an invalid identifier error
    pub fn invalid_identifier<S: Into<String>>(identifier: S) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create an unknown service error
    pub fn unknown_service<S: Into<String>>(identifier: S) -> Self {
        Self::UnknownService {
            identifier: identifier.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular_dependency<S: Into<String>>(identifier: S, chain: Vec<String>) -> Self {
        Self::CircularDependency {
            identifier: identifier.into(),
            chain,
        }
    }

    /// Create a construction error
    pub fn construction<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(identifier: S, expected: &'static str) -> Self {
        Self::TypeMismatch {
            identifier: identifier.into(),
            expected,
        }
    }

    /// Whether this is an [`Error::UnknownService`]
    pub fn is_unknown_service(&self) -> bool {
        matches!(self, Self::UnknownService { .. })
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
