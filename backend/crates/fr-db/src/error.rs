use fr_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Schema initialization failed: {message} {location}")]
    Schema {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}.{column}: {message} {location}")]
    Corrupt {
        table: &'static str,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to prepare database directory {path}: {source} {location}")]
    Io {
        path: String,
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Storage faults are unclassified from the core's point of view
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Keep storage details in the log, not in the error surfaced upward
        log::error!("Database error: {}", e);
        CoreError::internal("Database operation failed")
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
