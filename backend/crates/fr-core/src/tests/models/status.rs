use crate::{ErrorCode, Status};

use std::str::FromStr;

#[test]
fn test_status_as_str() {
    assert_eq!(Status::Open.as_str(), "OPEN");
    assert_eq!(Status::Planned.as_str(), "PLANNED");
    assert_eq!(Status::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(Status::Done.as_str(), "DONE");
}

#[test]
fn test_status_from_str_round_trips_every_variant() {
    for status in [Status::Open, Status::Planned, Status::InProgress, Status::Done] {
        assert_eq!(Status::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_status_from_str_rejects_lowercase_and_unknown() {
    assert!(Status::from_str("open").is_err());
    let err = Status::from_str("ARCHIVED").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test]
fn test_status_default_is_open() {
    assert_eq!(Status::default(), Status::Open);
}

#[test]
fn test_status_serializes_screaming_snake_case() {
    let json = serde_json::to_string(&Status::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");
}
