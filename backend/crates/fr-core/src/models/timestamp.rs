//! Timestamp helpers shared by every repository backend.
//!
//! Stored instants are truncated to microseconds: the durable store keeps
//! microsecond text, so the in-memory backend must produce the same values.

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current instant, truncated to microsecond precision.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Next `updated_at` for a mutation. Always strictly later than `previous`.
pub fn advance_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = current_timestamp();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
