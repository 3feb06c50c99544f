use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{errors::ApiError, ValidatedJson};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::UserError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// Create a new user
///
/// POST /users
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = service
        .create_user(input)
        .await
        .map_err(|e| e.into_api(uri.path()))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/:id
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service
        .find_user(id)
        .await
        .map_err(|e| e.into_api(uri.path()))?
        .ok_or_else(|| UserError::NotFound(id).into_api(uri.path()))?;

    Ok(Json(user))
}

/// List all users
///
/// GET /users
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = service
        .find_all_users()
        .await
        .map_err(|e| e.into_api(uri.path()))?;

    Ok(Json(users))
}

/// Update a user
///
/// PUT /users/:id
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service
        .update_user(id, input)
        .await
        .map_err(|e| e.into_api(uri.path()))?;

    Ok(Json(user))
}

/// Delete a user. Always 204, whether or not the id existed.
///
/// DELETE /users/:id
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete_user(id)
        .await
        .map_err(|e| e.into_api(uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}
