use crate::{CoreError, ErrorCode, FieldError};

#[test]
fn test_error_codes_are_stable_strings() {
    assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    assert_eq!(ErrorCode::Validation.as_str(), "VALIDATION_ERROR");
    assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL_ERROR");
}

#[test]
fn test_not_found_message_contains_id() {
    let err = CoreError::not_found("abc-123");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Feature request with id \"abc-123\" not found");
    assert!(err.details().is_none());
}

#[test]
fn test_validation_error_exposes_details() {
    let err = CoreError::validation(vec![FieldError::new("title", "too short")]);
    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.message(), "Input validation failed");
    assert_eq!(err.details().map(|d| d.len()), Some(1));
}

#[test]
fn test_internal_error_code() {
    let err = CoreError::internal("disk on fire");
    assert_eq!(err.code(), ErrorCode::Internal);
}
