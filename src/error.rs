//! Error types for the todo service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Todo Error Enum ==
/// Unified error type for the todo service.
#[derive(Error, Debug)]
pub enum TodoError {
    /// No todo with the requested id
    #[error("Todo not found: {0}")]
    NotFound(i64),

    /// Request failed boundary validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persistence layer failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Cache store failure (unreachable, rejected write, ...)
    #[error("Cache store error: {0}")]
    CacheStore(String),
}

// == Extractor Rejections ==
// Malformed bodies, query strings and path ids answer 400 with a JSON message.
impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for TodoError {
    fn from(rejection: QueryRejection) -> Self {
        TodoError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for TodoError {
    fn from(rejection: PathRejection) -> Self {
        TodoError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TodoError::NotFound(_) => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            TodoError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TodoError::Database(_) | TodoError::CacheStore(_) => {
                error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the todo service.
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = TodoError::NotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = TodoError::InvalidRequest("Title is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_failures_map_to_500() {
        let response = TodoError::CacheStore("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = TodoError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
