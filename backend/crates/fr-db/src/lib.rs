pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::in_memory_repository::InMemoryFeatureRequestRepository;
pub use repositories::sqlite_repository::SqliteFeatureRequestRepository;
