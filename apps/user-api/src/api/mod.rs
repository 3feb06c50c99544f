use axum::Router;
use domain_users::{handlers, UserRepository, UserService};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new().nest("/users", handlers::router(service))
}

/// Creates a router with the /ready endpoint.
///
/// Merged on top of the app router; the handler pings the database when
/// PostgreSQL is active.
pub fn ready_router(db: Option<sea_orm::DatabaseConnection>) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}
