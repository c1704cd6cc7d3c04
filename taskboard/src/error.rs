//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Identifier does not match the expected format. Raised at the boundary,
    /// before any lookup is attempted.
    #[error("invalid identifier: {id}")]
    InvalidIdentifier { id: String },

    /// Target index is outside the column's valid insertion range
    #[error("invalid target index {index} for column of {len} tasks")]
    InvalidPosition { index: usize, len: usize },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Column not found within the resolved board
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task not found within the resolved column
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Invalid field value in a request
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Underlying document store failure
    #[error("storage error: {message}")]
    Storage { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check if this error means an entity was absent at the resolved path
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. } | Self::ColumnNotFound { .. } | Self::TaskNotFound { .. }
        )
    }
}
