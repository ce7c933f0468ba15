use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::Low.as_str(), "LOW");
    assert_eq!(Priority::Medium.as_str(), "MEDIUM");
    assert_eq!(Priority::High.as_str(), "HIGH");
    assert_eq!(Priority::Critical.as_str(), "CRITICAL");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("CRITICAL").unwrap(), Priority::Critical);
    assert!(Priority::from_str("URGENT").is_err());
}

#[test]
fn test_priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_deserializes_from_wire_value() {
    let priority: Priority = serde_json::from_str("\"HIGH\"").unwrap();
    assert_eq!(priority, Priority::High);
}
