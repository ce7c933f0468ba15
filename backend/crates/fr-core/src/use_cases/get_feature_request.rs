use crate::{CoreError, FeatureRequestDetail, FeatureRequestRepository, Result as CoreErrorResult};

use uuid::Uuid;

pub struct GetFeatureRequestUseCase<'a> {
    repo: &'a dyn FeatureRequestRepository,
}

impl<'a> GetFeatureRequestUseCase<'a> {
    pub fn new(repo: &'a dyn FeatureRequestRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: Uuid) -> CoreErrorResult<FeatureRequestDetail> {
        let feature_request = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(id))?;

        let comments = self.repo.find_comments_by_feature_request_id(id).await?;

        Ok(FeatureRequestDetail {
            feature_request,
            comments,
        })
    }
}
