//! JSON extractor with automatic validation using the validator crate.

use axum::{
    extract::{FromRequest, Json, OriginalUri, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::ApiError;

/// JSON extractor that runs `validator` checks before the handler body.
///
/// Rejects with 400 and the uniform error body; the message enumerates
/// every violated field constraint, so handlers only ever see valid input.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUserRequest {
///     #[validate(email(message = "Email must be valid"))]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUserRequest>) {
///     // payload has passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_owned())
            .unwrap_or_else(|| req.uri().path().to_owned());

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(rejection.status(), rejection.body_text(), &path).into_response()
            })?;

        data.validate().map_err(|errors| {
            ApiError::new(StatusCode::BAD_REQUEST, constraint_summary(&errors), &path)
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

/// Flatten field errors into a single message, e.g.
/// "Email must be valid, First name is required".
fn constraint_summary(errors: &ValidationErrors) -> String {
    let mut violations: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect();
    violations.sort();
    violations.dedup();
    violations.join(", ")
}
