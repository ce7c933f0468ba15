use crate::{AddCommentInput, Comment, CoreError, FeatureRequestRepository, Result as CoreErrorResult};

use log::info;
use uuid::Uuid;

pub struct AddCommentUseCase<'a> {
    repo: &'a dyn FeatureRequestRepository,
}

impl<'a> AddCommentUseCase<'a> {
    pub fn new(repo: &'a dyn FeatureRequestRepository) -> Self {
        Self { repo }
    }

    /// Attach a comment. The parent must exist; repositories do not check.
    pub async fn execute(
        &self,
        feature_request_id: Uuid,
        input: AddCommentInput,
    ) -> CoreErrorResult<Comment> {
        if self.repo.find_by_id(feature_request_id).await?.is_none() {
            return Err(CoreError::not_found(feature_request_id));
        }

        let comment = self
            .repo
            .add_comment(Comment::new(feature_request_id, input.body))
            .await?;

        info!(
            "Added comment {} to feature request {}",
            comment.id, feature_request_id
        );

        Ok(comment)
    }
}
