//! Process-lifetime repository backed by plain maps.
//!
//! Intended for environments without a durable store. Nothing survives a
//! restart. Clones share the same underlying state, so the composition root
//! builds one instance and hands clones to whoever needs it.

use fr_core::{
    Comment, FeatureRequest, FeatureRequestPatch, FeatureRequestRepository,
    Result as CoreErrorResult, advance_timestamp,
};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct InMemoryState {
    feature_requests: HashMap<Uuid, FeatureRequest>,
    // Insertion order, so find_all is deterministic
    order: Vec<Uuid>,
    comments: HashMap<Uuid, Vec<Comment>>,
}

#[derive(Clone, Default)]
pub struct InMemoryFeatureRequestRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryFeatureRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeatureRequestRepository for InMemoryFeatureRequestRepository {
    async fn find_all(&self) -> CoreErrorResult<Vec<FeatureRequest>> {
        let state = self.state.read().await;

        Ok(state
            .order
            .iter()
            .filter_map(|id| state.feature_requests.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<FeatureRequest>> {
        Ok(self.state.read().await.feature_requests.get(&id).cloned())
    }

    async fn save(&self, feature_request: FeatureRequest) -> CoreErrorResult<FeatureRequest> {
        let mut state = self.state.write().await;

        if state
            .feature_requests
            .insert(feature_request.id, feature_request.clone())
            .is_none()
        {
            state.order.push(feature_request.id);
        }
        state.comments.entry(feature_request.id).or_default();

        log::debug!("Stored feature request {} in memory", feature_request.id);

        Ok(feature_request)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: FeatureRequestPatch,
    ) -> CoreErrorResult<Option<FeatureRequest>> {
        let mut state = self.state.write().await;

        let Some(existing) = state.feature_requests.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(existing);
        existing.updated_at = advance_timestamp(existing.updated_at);

        Ok(Some(existing.clone()))
    }

    async fn add_comment(&self, comment: Comment) -> CoreErrorResult<Comment> {
        self.state
            .write()
            .await
            .comments
            .entry(comment.feature_request_id)
            .or_default()
            .push(comment.clone());

        Ok(comment)
    }

    async fn find_comments_by_feature_request_id(
        &self,
        feature_request_id: Uuid,
    ) -> CoreErrorResult<Vec<Comment>> {
        let mut comments = self
            .state
            .read()
            .await
            .comments
            .get(&feature_request_id)
            .cloned()
            .unwrap_or_default();

        // Stable: equal timestamps keep append order, matching the SQLite backend
        comments.sort_by_key(|c| c.created_at);

        Ok(comments)
    }
}
