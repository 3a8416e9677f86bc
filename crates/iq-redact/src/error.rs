//! Error types for redaction policy files.

use thiserror::Error;

/// Result type for redaction policy operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur while loading or saving a policy.
#[derive(Error, Debug)]
pub enum RedactionError {
    /// The policy content is unusable.
    #[error("policy error: {0}")]
    PolicyError(String),

    /// I/O error during policy file operations.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}
