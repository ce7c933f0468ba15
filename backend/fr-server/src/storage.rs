use crate::error::Result as ServerErrorResult;

use fr_config::{Config, StorageBackend};
use fr_core::FeatureRequestRepository;
use fr_db::{InMemoryFeatureRequestRepository, SqliteFeatureRequestRepository};

use std::sync::Arc;

use log::{info, warn};

/// Compose the repository named by `storage.backend`
pub async fn build_repository(
    config: &Config,
) -> ServerErrorResult<Arc<dyn FeatureRequestRepository>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage - data is lost on restart");
            Ok(Arc::new(InMemoryFeatureRequestRepository::new()))
        }
        StorageBackend::Sqlite => {
            let database_path = config.database_path()?;
            info!("Connecting to database: {}", database_path.display());

            let pool = fr_db::connect(&database_path).await?;
            info!("Database connection established");

            Ok(Arc::new(SqliteFeatureRequestRepository::new(pool)))
        }
    }
}
