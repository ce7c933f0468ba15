use crate::{
    CoreError, FeatureRequest, FeatureRequestRepository, Result as CoreErrorResult,
    UpdateFeatureRequestInput,
};

use log::info;
use uuid::Uuid;

pub struct UpdateFeatureRequestUseCase<'a> {
    repo: &'a dyn FeatureRequestRepository,
}

impl<'a> UpdateFeatureRequestUseCase<'a> {
    pub fn new(repo: &'a dyn FeatureRequestRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateFeatureRequestInput,
    ) -> CoreErrorResult<FeatureRequest> {
        let updated = self
            .repo
            .update(id, input.into())
            .await?
            .ok_or_else(|| CoreError::not_found(id))?;

        info!(
            "Updated feature request {}: status={}, priority={}",
            updated.id, updated.status, updated.priority
        );

        Ok(updated)
    }
}
