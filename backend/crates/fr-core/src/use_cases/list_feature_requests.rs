use crate::{FeatureRequest, FeatureRequestRepository, Result as CoreErrorResult};

pub struct ListFeatureRequestsUseCase<'a> {
    repo: &'a dyn FeatureRequestRepository,
}

impl<'a> ListFeatureRequestsUseCase<'a> {
    pub fn new(repo: &'a dyn FeatureRequestRepository) -> Self {
        Self { repo }
    }

    /// All feature requests, newest first. Equal timestamps keep repository order.
    pub async fn execute(&self) -> CoreErrorResult<Vec<FeatureRequest>> {
        let mut all = self.repo.find_all().await?;
        // sort_by is stable
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
