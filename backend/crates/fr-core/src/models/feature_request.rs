use crate::{Priority, Status, current_timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub id: Uuid,

    pub title: String,
    pub description: String,

    pub status: Status,
    pub priority: Priority,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeatureRequest {
    pub fn new(title: String, description: String, priority: Priority) -> Self {
        let now = current_timestamp();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: Status::Open,
            priority,
            created_at: now,
            updated_at: now,
        }
    }
}
