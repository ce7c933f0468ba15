use fr_core::{Comment, FeatureRequest, Priority};

use chrono::Duration;
use uuid::Uuid;

/// Creates a test FeatureRequest with sensible defaults
pub fn create_test_feature_request() -> FeatureRequest {
    FeatureRequest::new(
        "Export to CSV".to_string(),
        "Users need to export their data as CSV files".to_string(),
        Priority::High,
    )
}

/// Creates a test FeatureRequest whose timestamps are shifted by `seconds_offset`
pub fn create_test_feature_request_at(title: &str, seconds_offset: i64) -> FeatureRequest {
    let mut fr = FeatureRequest::new(
        title.to_string(),
        format!("Description for {}", title),
        Priority::Medium,
    );
    fr.created_at += Duration::seconds(seconds_offset);
    fr.updated_at = fr.created_at;
    fr
}

/// Creates a test Comment with sensible defaults
pub fn create_test_comment(feature_request_id: Uuid, body: &str) -> Comment {
    Comment::new(feature_request_id, body.to_string())
}

/// Creates a test Comment with a custom timestamp offset
pub fn create_test_comment_at(feature_request_id: Uuid, body: &str, seconds_offset: i64) -> Comment {
    let mut comment = Comment::new(feature_request_id, body.to_string());
    comment.created_at += Duration::seconds(seconds_offset);
    comment
}
