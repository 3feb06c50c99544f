use axum::http::StatusCode;
use axum_helpers::errors::ApiError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Attach the request path and convert into the client-facing response.
    pub fn into_api(self, path: &str) -> ApiError {
        match &self {
            UserError::NotFound(id) => {
                tracing::info!(user_id = %id, "User not found");
                ApiError::new(StatusCode::NOT_FOUND, self.to_string(), path)
            }
            UserError::DuplicateEmail(email) => {
                tracing::info!(email = %email, "Duplicate email rejected");
                ApiError::new(StatusCode::CONFLICT, self.to_string(), path)
            }
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                    path,
                )
            }
        }
    }
}
