//! Mapping engine errors onto HTTP responses
//!
//! Every error becomes a status code plus a JSON `{message}` body. Invalid
//! identifiers and positions are the caller's fault (400), absent entities
//! are 404 per resolution level, everything else is a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use taskboard::BoardError;

/// Wrapper so engine errors can flow out of handlers with `?`
#[derive(Debug)]
pub struct ApiError(pub BoardError);

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BoardError::InvalidIdentifier { .. }
            | BoardError::InvalidPosition { .. }
            | BoardError::InvalidValue { .. } => (StatusCode::BAD_REQUEST, self.0.to_string()),
            BoardError::BoardNotFound { .. }
            | BoardError::ColumnNotFound { .. }
            | BoardError::TaskNotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            BoardError::Storage { .. } | BoardError::Io(_) | BoardError::Json(_) => {
                tracing::error!(error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: BoardError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(BoardError::invalid_identifier("nope")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BoardError::InvalidPosition { index: 9, len: 2 }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BoardError::BoardNotFound { id: "x".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(BoardError::TaskNotFound { id: "x".into() }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(BoardError::storage("disk on fire")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
