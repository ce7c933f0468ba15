use crate::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::result::Result as StdResult;

use serde::Serialize;
use thiserror::Error;

/// Stable, machine-readable classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected input. `field` is `None` for rules spanning the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Feature request with id \"{id}\" not found {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Input validation failed".to_string(),
            details,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Validation { .. } | Self::InvalidStatus { .. } | Self::InvalidPriority { .. } => {
                ErrorCode::Validation
            }
            Self::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable message without the capture location.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { id, .. } => format!("Feature request with id \"{id}\" not found"),
            Self::Validation { message, .. } | Self::Internal { message, .. } => message.clone(),
            Self::InvalidStatus { value, .. } => format!("Invalid status: {value}"),
            Self::InvalidPriority { value, .. } => format!("Invalid priority: {value}"),
        }
    }

    pub fn details(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation { details, .. } => Some(details),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
