//! Persistence contract for feature requests and their comments.
//!
//! Every backend must agree on ordering and absence semantics:
//! - `find_by_id` / `update` report a missing id as `Ok(None)`, never as an error.
//! - `find_comments_by_feature_request_id` returns comments oldest first, and an
//!   empty list when the parent has none or does not exist.
//! - `find_all` carries no ordering guarantee; callers sort.
//!
//! Backends do not enforce that a comment's parent exists. That check belongs
//! to [`crate::AddCommentUseCase`].

use crate::{Comment, FeatureRequest, Priority, Result as CoreErrorResult, Status};

use async_trait::async_trait;
use uuid::Uuid;

/// Fields an update may change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureRequestPatch {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl FeatureRequestPatch {
    /// Apply the patch to an entity. Does not touch `updated_at`.
    pub fn apply_to(&self, feature_request: &mut FeatureRequest) {
        if let Some(status) = self.status {
            feature_request.status = status;
        }
        if let Some(priority) = self.priority {
            feature_request.priority = priority;
        }
    }
}

#[async_trait]
pub trait FeatureRequestRepository: Send + Sync {
    async fn find_all(&self) -> CoreErrorResult<Vec<FeatureRequest>>;

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<FeatureRequest>>;

    /// Insert a new entity. The caller guarantees `id` is fresh.
    async fn save(&self, feature_request: FeatureRequest) -> CoreErrorResult<FeatureRequest>;

    /// Partial update. Recomputes `updated_at` so it strictly advances.
    async fn update(
        &self,
        id: Uuid,
        patch: FeatureRequestPatch,
    ) -> CoreErrorResult<Option<FeatureRequest>>;

    async fn add_comment(&self, comment: Comment) -> CoreErrorResult<Comment>;

    async fn find_comments_by_feature_request_id(
        &self,
        feature_request_id: Uuid,
    ) -> CoreErrorResult<Vec<Comment>>;
}
