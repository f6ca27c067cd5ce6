//! Custom error types for pocket-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for pocket-tracker operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Errors from the preference store
    #[error("Storage error: {0}")]
    Storage(String),

    /// A backup blob could not be parsed or failed validation
    #[error("Corrupt backup: {0}")]
    CorruptBackup(String),

    /// The backup target could not be opened for reading or writing
    #[error("Backup storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PocketError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a backup that failed to parse
    pub fn is_corrupt_backup(&self) -> bool {
        matches!(self, Self::CorruptBackup(_))
    }
}

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for pocket-tracker operations
pub type PocketResult<T> = Result<T, PocketError>;
