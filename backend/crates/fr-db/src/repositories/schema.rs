//! Table definitions for the SQLite backend.
//!
//! Timestamps are fixed-width RFC 3339 text in UTC with microseconds
//! (`2026-10-19T08:15:00.000000Z`), so string order equals time order.

use crate::{DbError, Result as DbErrorResult};

use fr_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

const CREATE_FEATURE_REQUESTS: &str = r#"
    CREATE TABLE IF NOT EXISTS feature_requests (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        status TEXT NOT NULL,
        priority TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const CREATE_COMMENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS comments (
        id TEXT PRIMARY KEY NOT NULL,
        feature_request_id TEXT NOT NULL REFERENCES feature_requests(id),
        body TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

const CREATE_COMMENTS_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_comments_feature_request
        ON comments(feature_request_id, created_at)
"#;

/// Create both tables if they are missing. Safe to run repeatedly.
pub(crate) async fn create_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    for statement in [CREATE_FEATURE_REQUESTS, CREATE_COMMENTS, CREATE_COMMENTS_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    log::info!("Feature request schema ready");

    Ok(())
}

pub(crate) fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[track_caller]
pub(crate) fn parse_timestamp(
    value: &str,
    table: &'static str,
    column: &'static str,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::Corrupt {
            table,
            column,
            message: format!("invalid timestamp {:?}: {}", value, e),
            location: ErrorLocation::from(Location::caller()),
        })
}
