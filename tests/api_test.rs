//! HTTP tests for the credential endpoints.
//!
//! The router runs against an in-memory SQLite database; requests are driven
//! through `tower::ServiceExt::oneshot` without binding a socket.

mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use credstore::api::{create_router, AppState};

use common::{memory_database, test_config};

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_app() -> (Router, AppState) {
    let db = memory_database().await;
    let state = AppState::from_config(db, &test_config("sqlite::memory:")).unwrap();
    (create_router(state.clone()), state)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_success() {
    let (app, state) = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/register",
        json!({ "username": "alice", "password": "pw1" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": true }));
    assert!(state.accounts.authenticate("alice", "pw1").await.unwrap());
}

#[tokio::test]
async fn test_register_duplicate_returns_failure_envelope() {
    let (app, _) = test_app().await;
    let payload = json!({ "username": "alice", "password": "pw1" });

    post_json(&app, "/api/register", payload.clone()).await;
    let (status, body) = post_json(&app, "/api/register", payload).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "DUPLICATE_USERNAME");
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let (app, _) = test_app().await;

    for payload in [
        json!({ "username": "alice" }),
        json!({ "password": "pw1" }),
        json!({ "username": "", "password": "pw1" }),
        json!({ "username": "alice", "password": "" }),
        json!({ "username": 42, "password": "pw1" }),
    ] {
        let (status, body) = post_json(&app, "/api/register", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["success"], json!(false), "payload: {payload}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_register_rejects_non_json_body() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/register")
            .body(Body::from("username=alice&password=pw1"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_success_and_failures() {
    let (app, state) = test_app().await;
    state.accounts.create("alice", "pw1").await.unwrap();

    let (status, body) = post_json(
        &app,
        "/api/login",
        json!({ "username": "alice", "password": "pw1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (wrong_status, wrong_body) = post_json(
        &app,
        "/api/login",
        json!({ "username": "alice", "password": "wrong" }),
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        &app,
        "/api/login",
        json!({ "username": "nobody", "password": "anything" }),
    )
    .await;

    // Wrong password and unknown user are indistinguishable
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["success"], json!(false));
}

#[tokio::test]
async fn test_login_missing_password() {
    let (app, _) = test_app().await;

    let (status, body) = post_json(&app, "/api/login", json!({ "username": "alice" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_register_then_login_over_http() {
    let (app, _) = test_app().await;
    let credentials = json!({ "username": "carol", "password": "s3cret" });

    let (status, _) = post_json(&app, "/api/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/api/login", credentials).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

// =============================================================================
// Infrastructure Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_degraded_when_store_closed() {
    let (app, state) = test_app().await;
    state.database.get_connection().close().await.unwrap();

    let (status, body) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_login_with_store_closed_is_service_unavailable() {
    let (app, state) = test_app().await;
    state.database.get_connection().close().await.unwrap();

    let (status, body) = post_json(
        &app,
        "/api/login",
        json!({ "username": "alice", "password": "pw1" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/register").is_some());
    assert!(body["paths"].get("/api/login").is_some());
}
