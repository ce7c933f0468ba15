#![allow(dead_code)]

//! Test infrastructure for fr-server API tests

use fr_config::StorageBackend;
use fr_db::{InMemoryFeatureRequestRepository, SqliteFeatureRequestRepository};
use fr_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// AppState over the in-memory repository
pub fn create_test_app_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryFeatureRequestRepository::new()),
        StorageBackend::Memory,
    )
}

/// AppState over an in-memory SQLite database
pub async fn create_sqlite_app_state() -> AppState {
    let pool = fr_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        Arc::new(SqliteFeatureRequestRepository::new(pool)),
        StorageBackend::Sqlite,
    )
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state())
}

/// Send a request through the router and decode the JSON response
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Send a raw (possibly malformed) JSON body
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Create a feature request through the API and return its JSON
pub async fn create_feature_request(app: &Router, title: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/feature-requests",
        Some(serde_json::json!({
            "title": title,
            "description": "A description long enough to pass validation",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    json
}
