//! Error types for noteboard-core

use thiserror::Error;

/// Result type alias using noteboard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures surfaced inline in the note form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Save was attempted with empty or whitespace-only text.
    #[error("El texto es obligatorio")]
    EmptyText,
}

/// Errors that can occur in noteboard-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Draft rejected by validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Note store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}
