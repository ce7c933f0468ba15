use crate::{ApiError, ApiJson, CreateFeatureRequestRequest, UpdateFeatureRequestRequest};

use axum::{
    body::Body,
    extract::{FromRequest, Request},
};
use http::StatusCode;

fn json_request(body: &str) -> Request {
    Request::builder()
        .method("POST")
        .uri("/api/feature-requests")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_well_formed_body_is_extracted() {
    let request = json_request(r#"{"title": "Dark mode", "description": "Please add it soon"}"#);

    let ApiJson(req) = ApiJson::<CreateFeatureRequestRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(req.title, "Dark mode");
    assert!(req.priority.is_none());
}

#[tokio::test]
async fn test_syntax_error_rejects_as_validation() {
    let request = json_request(r#"{"title": "#);

    let result = ApiJson::<CreateFeatureRequestRequest>::from_request(request, &()).await;

    match result {
        Err(error @ ApiError::Validation { .. }) => {
            assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(other) => panic!("Expected Validation, got {:?}", other),
        Ok(_) => panic!("Expected rejection"),
    }
}

#[tokio::test]
async fn test_missing_field_rejects_as_validation() {
    let request = json_request(r#"{"title": "Dark mode"}"#);

    let result = ApiJson::<CreateFeatureRequestRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_missing_content_type_rejects_as_validation() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/feature-requests")
        .body(Body::from(r#"{"title": "Dark mode"}"#))
        .unwrap();

    let result = ApiJson::<CreateFeatureRequestRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_null_priority_rejects_as_validation() {
    let request = json_request(
        r#"{"title": "Dark mode", "description": "Please add it soon", "priority": null}"#,
    );

    let result = ApiJson::<CreateFeatureRequestRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_null_status_in_update_rejects_as_validation() {
    let request = json_request(r#"{"status": null, "priority": "LOW"}"#);

    let result = ApiJson::<UpdateFeatureRequestRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_omitted_update_fields_are_none() {
    let request = json_request(r#"{"priority": "LOW"}"#);

    let ApiJson(req) = ApiJson::<UpdateFeatureRequestRequest>::from_request(request, &())
        .await
        .unwrap();

    assert!(req.status.is_none());
    assert_eq!(req.priority.as_deref(), Some("LOW"));
}
