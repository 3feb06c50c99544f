use utoipa::OpenApi;

/// User service API documentation
#[derive(OpenApi)]
#[openapi(
    components(schemas(
        domain_users::CreateUserRequest,
        domain_users::UpdateUserRequest,
        domain_users::UserResponse,
        axum_helpers::ErrorBody,
    )),
    tags((name = "users", description = "User management operations"))
)]
pub struct ApiDoc;
