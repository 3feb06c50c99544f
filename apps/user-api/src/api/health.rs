//! Readiness handler with a real database check when PostgreSQL is active.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use sea_orm::DatabaseConnection;
use serde_json::json;

pub async fn ready_handler(State(db): State<Option<DatabaseConnection>>) -> Response {
    let Some(db) = db else {
        // In-memory store: nothing external to probe
        return (StatusCode::OK, Json(json!({ "status": "ready" }))).into_response();
    };

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async move {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
