//! Error types for loading request descriptions.

use thiserror::Error;

/// Result type alias for iq-common operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a `RequestSpec`.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the request file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The request file is not valid JSON for a request.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request description is structurally unusable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
