use crate::{Comment, FeatureRequest, FeatureRequestPatch, Priority, Status};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_new_feature_request_then_open_with_equal_timestamps() {
    let fr = FeatureRequest::new(
        "Export to CSV".to_string(),
        "Users need to export their data as CSV files".to_string(),
        Priority::High,
    );

    assert_that!(fr.status, eq(Status::Open));
    assert_that!(fr.priority, eq(Priority::High));
    assert_that!(fr.created_at, eq(fr.updated_at));
    assert_that!(fr.id.get_version_num(), eq(4));
}

#[test]
fn given_two_new_feature_requests_then_ids_differ() {
    let a = FeatureRequest::new("Aaa".into(), "Description A".into(), Priority::Low);
    let b = FeatureRequest::new("Bbb".into(), "Description B".into(), Priority::Low);

    assert_that!(a.id, not(eq(b.id)));
}

#[test]
fn given_feature_request_when_serialized_then_uses_camel_case_fields() {
    let fr = FeatureRequest::new("Dark mode".into(), "Add a dark mode toggle".into(), Priority::Medium);

    let json = serde_json::to_value(&fr).unwrap();

    assert_that!(json["status"], eq(&serde_json::json!("OPEN")));
    assert_that!(json["priority"], eq(&serde_json::json!("MEDIUM")));
    assert_that!(json.get("createdAt"), some(anything()));
    assert_that!(json.get("updatedAt"), some(anything()));
    assert_that!(json["id"].as_str(), some(eq(fr.id.to_string().as_str())));
}

#[test]
fn given_patch_with_status_only_when_applied_then_priority_unchanged() {
    let mut fr = FeatureRequest::new("Dark mode".into(), "Add a dark mode toggle".into(), Priority::High);
    let patch = FeatureRequestPatch {
        status: Some(Status::Planned),
        priority: None,
    };

    patch.apply_to(&mut fr);

    assert_that!(fr.status, eq(Status::Planned));
    assert_that!(fr.priority, eq(Priority::High));
}

#[test]
fn given_new_comment_then_references_parent_and_has_v4_id() {
    let parent = Uuid::new_v4();
    let comment = Comment::new(parent, "Looks good".into());

    assert_that!(comment.feature_request_id, eq(parent));
    assert_that!(comment.id.get_version_num(), eq(4));

    let json = serde_json::to_value(&comment).unwrap();
    assert_that!(json.get("featureRequestId"), some(anything()));
}
