//! Handler tests for the Users domain
//!
//! These drive the axum router end to end against the in-memory store:
//! request deserialization, validation, status codes, and the uniform
//! error body.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, UserResponse, UserService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_user(email: &str, first_name: &str, last_name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "firstName": first_name,
                "lastName": last_name
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn create_user(app: &Router, email: &str) -> UserResponse {
    let response = app
        .clone()
        .oneshot(post_user(email, "Test", "User"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_user_returns_201_with_generated_fields() {
    let app = app();

    let response = app
        .oneshot(post_user("a@b.com", "A", "B"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let user: Value = json_body(response.into_body()).await;
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(user["firstName"], "A");
    assert_eq!(user["lastName"], "B");
    assert!(user.get("id").is_some());
    assert!(user.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_user_rejects_invalid_email() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_user("invalid-email", "Test", "User"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 400);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Email must be valid"));

    // The service was never invoked: nothing was persisted
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let users: Vec<Value> = json_body(response.into_body()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_user_rejects_blank_first_name() {
    let app = app();

    let response = app
        .oneshot(post_user("test@example.com", "", "User"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("First name is required"));
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflicts() {
    let app = app();

    create_user(&app, "taken@example.com").await;

    let response = app
        .oneshot(post_user("taken@example.com", "Other", "Person"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("taken@example.com"));
}

#[tokio::test]
async fn test_get_user_returns_created_representation() {
    let app = app();

    let created = create_user(&app, "test@example.com").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: UserResponse = json_body(response.into_body()).await;
    assert_eq!(user.id, created.id);
    assert_eq!(user.email, created.email);
    assert_eq!(user.created_at, created.created_at);
}

#[tokio::test]
async fn test_get_missing_user_returns_404_error_body() {
    let app = app();
    let missing_id = uuid::Uuid::now_v7();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", missing_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert!(body.get("timestamp").is_some());
    assert_eq!(body["path"], format!("/{}", missing_id));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(&missing_id.to_string()));
}

#[tokio::test]
async fn test_list_users_returns_all() {
    let app = app();

    create_user(&app, "a@example.com").await;
    create_user(&app, "b@example.com").await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_list_users_empty_store_returns_empty_array() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let users: Vec<UserResponse> = json_body(response.into_body()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_update_user_overwrites_fields_preserving_identity() {
    let app = app();

    let created = create_user(&app, "old@example.com").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "email": "new@example.com",
                        "firstName": "New",
                        "lastName": "Person"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: UserResponse = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Person");
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let app = app();
    let missing_id = uuid::Uuid::now_v7();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", missing_id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "email": "new@example.com",
                        "firstName": "New",
                        "lastName": "Person"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_rejects_invalid_email() {
    let app = app();

    let created = create_user(&app, "test@example.com").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", created.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "email": "not-an-email",
                        "firstName": "New",
                        "lastName": "Person"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_returns_204_and_is_idempotent() {
    let app = app();

    let created = create_user(&app, "test@example.com").await;

    let delete_request = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", created.id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again still succeeds
    let response = app.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // And the user is gone
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
