//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "details"?}}`
//! with the status code its classification implies.

use fr_core::{CoreError, ErrorCode, FieldError};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// NOT_FOUND, VALIDATION_ERROR or INTERNAL_ERROR
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 422
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// 500. `message` is logged, never sent.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::NotFound { .. } => ErrorCode::NotFound,
            ApiError::Validation { .. } => ErrorCode::Validation,
            ApiError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code() {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().as_str();

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code,
                message,
                details: None,
            },
            ApiError::Validation {
                message, details, ..
            } => ApiErrorBody {
                code,
                message,
                details: Some(details),
            },
            ApiError::Internal { message, location } => {
                log::error!("Request failed: {} {}", message, location);
                ApiErrorBody {
                    code,
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                    details: None,
                }
            }
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e.code() {
            ErrorCode::NotFound => ApiError::NotFound {
                message: e.message(),
                location,
            },
            ErrorCode::Validation => {
                let details = match e.details() {
                    Some(details) => details.to_vec(),
                    None => vec![FieldError::form(e.message())],
                };
                ApiError::Validation {
                    message: String::from("Input validation failed"),
                    details,
                    location,
                }
            }
            ErrorCode::Internal => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Unreadable or ill-typed JSON bodies are a validation failure
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: String::from("Invalid request data"),
            details: vec![FieldError::form(rejection.body_text())],
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
