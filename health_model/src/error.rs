//! Error types for the health_model library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for health_model operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or a value failed to coerce
    #[error("Validation error: {0}")]
    Validation(String),

    /// An abstract operation was invoked on the bare entity base
    #[error("{0}() must be implemented by a concrete entity")]
    NotImplemented(&'static str),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for building a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Whether this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
