use crate::{advance_timestamp, current_timestamp};

use chrono::{Duration, Timelike};

#[test]
fn test_current_timestamp_has_microsecond_precision() {
    let now = current_timestamp();
    assert_eq!(now.nanosecond() % 1_000, 0);
}

#[test]
fn test_advance_timestamp_is_strictly_later_than_previous() {
    let previous = current_timestamp();
    assert!(advance_timestamp(previous) > previous);
}

#[test]
fn test_advance_timestamp_handles_previous_in_future() {
    let future = current_timestamp() + Duration::hours(1);
    assert_eq!(advance_timestamp(future), future + Duration::microseconds(1));
}
