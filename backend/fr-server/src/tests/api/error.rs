use crate::ApiError;

use fr_core::{CoreError, FieldError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Feature request with id \"abc\" not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(
        json["error"]["message"],
        "Feature request with id \"abc\" not found"
    );
    assert!(json["error"].get("details").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_422_with_details() {
    let error = ApiError::Validation {
        message: "Input validation failed".into(),
        details: vec![
            FieldError::new("title", "Title must be at least 3 characters"),
            FieldError::form("At least one of status or priority must be provided"),
        ],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["details"][0]["field"], "title");
    assert!(json["error"]["details"][1].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500_without_leaking_message() {
    let error = ApiError::Internal {
        message: "Database operation failed: disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "An unexpected error occurred");
}

#[test]
fn test_core_not_found_converts_to_not_found() {
    let id = uuid::Uuid::new_v4();

    let api_error: ApiError = CoreError::not_found(id).into();

    match api_error {
        ApiError::NotFound { message, .. } => {
            assert_eq!(message, format!("Feature request with id \"{}\" not found", id));
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_core_validation_converts_with_details() {
    let core = CoreError::validation(vec![FieldError::new("body", "Comment cannot be empty")]);

    let api_error: ApiError = core.into();

    match api_error {
        ApiError::Validation { details, .. } => {
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].field.as_deref(), Some("body"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_invalid_status_converts_to_validation() {
    let core = CoreError::InvalidStatus {
        value: "ARCHIVED".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core.into();

    assert_eq!(api_error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    match api_error {
        ApiError::Validation { details, .. } => {
            assert_eq!(details[0].message, "Invalid status: ARCHIVED");
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_internal_converts_to_internal() {
    let api_error: ApiError = CoreError::internal("Database operation failed").into();

    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
