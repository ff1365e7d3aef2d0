//! Error types for sphinxql

use thiserror::Error;

/// Result type alias for sphinxql operations
pub type SphinxResult<T> = Result<T, SphinxError>;

/// Error types for building and rendering SphinxQL
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphinxError {
    /// Malformed predicate construction (unknown operator, bad kind, placeholder mismatch, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unsupported entry passed to WHERE/HAVING ingestion
    #[error("Invalid where entry at {position}: {message}")]
    InvalidEntry { position: String, message: String },

    /// Statement-level validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SphinxError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an ingestion error for a specific position or key
    pub fn invalid_entry(position: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            position: position.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this error was caused by a bad argument (construction or ingestion).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidEntry { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for SphinxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
