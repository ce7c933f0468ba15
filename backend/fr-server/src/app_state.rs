use fr_config::StorageBackend;
use fr_core::FeatureRequestRepository;

use std::sync::Arc;

/// Shared handler state. The repository is chosen once at startup.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn FeatureRequestRepository>,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(repository: Arc<dyn FeatureRequestRepository>, storage: StorageBackend) -> Self {
        Self {
            repository,
            storage,
        }
    }
}
