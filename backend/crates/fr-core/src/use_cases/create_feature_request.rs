use crate::{
    CreateFeatureRequestInput, FeatureRequest, FeatureRequestRepository,
    Result as CoreErrorResult,
};

use log::info;

pub struct CreateFeatureRequestUseCase<'a> {
    repo: &'a dyn FeatureRequestRepository,
}

impl<'a> CreateFeatureRequestUseCase<'a> {
    pub fn new(repo: &'a dyn FeatureRequestRepository) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateFeatureRequestInput) -> CoreErrorResult<FeatureRequest> {
        let entity = FeatureRequest::new(input.title, input.description, input.priority);
        let saved = self.repo.save(entity).await?;

        info!(
            "Created feature request {} (priority {})",
            saved.id, saved.priority
        );

        Ok(saved)
    }
}
