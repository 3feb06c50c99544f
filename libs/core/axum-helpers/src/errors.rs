//! Structured error responses shared by all handlers.

use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Error payload returned on every 4xx/5xx response.
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2025-01-01T12:00:00Z",
///   "status": 404,
///   "message": "User not found with id: 0194e7a2-...",
///   "path": "/api/users/0194e7a2-..."
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// When the error occurred
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, duplicated in the body for log scraping
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// Request path the error occurred on
    pub path: String,
}

/// An HTTP error bound to the request path it occurred on.
///
/// Handlers build one of these (directly or by converting a domain error)
/// and return it; the response body is an [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }

    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, path)
    }

    pub fn conflict(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message, path)
    }

    pub fn internal(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, path)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            timestamp: Utc::now(),
            status: self.status.as_u16(),
            message: self.message,
            path: self.path,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    ApiError::not_found("The requested resource was not found", uri.path()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            timestamp: Utc::now(),
            status: 404,
            message: "User not found with id: 42".to_string(),
            path: "/api/users/42".to_string(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("timestamp").is_some());
        assert_eq!(value["status"], 404);
        assert_eq!(value["message"], "User not found with id: 42");
        assert_eq!(value["path"], "/api/users/42");
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(
            ApiError::not_found("gone", "/x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("taken", "/x").status(),
            StatusCode::CONFLICT
        );
    }
}
