use crate::current_timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only note attached to a feature request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub feature_request_id: Uuid,

    pub body: String,

    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(feature_request_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            feature_request_id,
            body,
            created_at: current_timestamp(),
        }
    }
}
