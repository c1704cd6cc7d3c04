//! Client-side error types

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the server or the local cache
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request
    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    /// Local cache IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Local cache serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
