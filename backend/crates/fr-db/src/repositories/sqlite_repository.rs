//! Durable repository over SQLite.
//!
//! The schema is created lazily: the first call on a repository instance runs
//! `CREATE TABLE IF NOT EXISTS` once, guarded by a `OnceCell`, and every later
//! call skips straight to its query.
//!
//! `update` is a read followed by a write with no surrounding transaction.
//! Two concurrent updates to the same row can interleave; the last write wins.

use crate::repositories::schema::{create_schema, format_timestamp, parse_timestamp};
use crate::{DbError, Result as DbErrorResult};

use fr_core::{
    Comment, ErrorLocation, FeatureRequest, FeatureRequestPatch, FeatureRequestRepository,
    Priority, Result as CoreErrorResult, Status, advance_timestamp,
};

use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tokio::sync::OnceCell;
use uuid::Uuid;

const FEATURE_REQUEST_COLUMNS: &str =
    "id, title, description, status, priority, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteFeatureRequestRepository {
    pool: SqlitePool,
    schema_ready: Arc<OnceCell<()>>,
}

impl SqliteFeatureRequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            schema_ready: Arc::new(OnceCell::new()),
        }
    }

    async fn ensure_schema(&self) -> DbErrorResult<()> {
        self.schema_ready
            .get_or_try_init(|| create_schema(&self.pool))
            .await?;
        Ok(())
    }

    async fn fetch_all(&self) -> DbErrorResult<Vec<FeatureRequest>> {
        self.ensure_schema().await?;

        let rows = sqlx::query(&format!(
            "SELECT {FEATURE_REQUEST_COLUMNS} FROM feature_requests ORDER BY rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_feature_request).collect()
    }

    async fn fetch_by_id(&self, id: Uuid) -> DbErrorResult<Option<FeatureRequest>> {
        self.ensure_schema().await?;

        let row = sqlx::query(&format!(
            "SELECT {FEATURE_REQUEST_COLUMNS} FROM feature_requests WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_feature_request).transpose()
    }

    async fn insert(&self, feature_request: &FeatureRequest) -> DbErrorResult<()> {
        self.ensure_schema().await?;

        sqlx::query(
            r#"
                INSERT INTO feature_requests (
                    id, title, description, status, priority, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(feature_request.id.to_string())
        .bind(&feature_request.title)
        .bind(&feature_request.description)
        .bind(feature_request.status.as_str())
        .bind(feature_request.priority.as_str())
        .bind(format_timestamp(feature_request.created_at))
        .bind(format_timestamp(feature_request.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn apply_patch(
        &self,
        id: Uuid,
        patch: FeatureRequestPatch,
    ) -> DbErrorResult<Option<FeatureRequest>> {
        let Some(mut existing) = self.fetch_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut existing);
        existing.updated_at = advance_timestamp(existing.updated_at);

        let result = sqlx::query(
            r#"
                UPDATE feature_requests
                SET status = ?, priority = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(existing.status.as_str())
        .bind(existing.priority.as_str())
        .bind(format_timestamp(existing.updated_at))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        // Row vanished between the read and the write
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }

    async fn insert_comment(&self, comment: &Comment) -> DbErrorResult<()> {
        self.ensure_schema().await?;

        sqlx::query(
            r#"
                INSERT INTO comments (id, feature_request_id, body, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.feature_request_id.to_string())
        .bind(&comment.body)
        .bind(format_timestamp(comment.created_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_comments(&self, feature_request_id: Uuid) -> DbErrorResult<Vec<Comment>> {
        self.ensure_schema().await?;

        let rows = sqlx::query(
            r#"
                SELECT id, feature_request_id, body, created_at
                FROM comments
                WHERE feature_request_id = ?
                ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(feature_request_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_comment).collect()
    }
}

#[async_trait]
impl FeatureRequestRepository for SqliteFeatureRequestRepository {
    async fn find_all(&self) -> CoreErrorResult<Vec<FeatureRequest>> {
        Ok(self.fetch_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<FeatureRequest>> {
        Ok(self.fetch_by_id(id).await?)
    }

    async fn save(&self, feature_request: FeatureRequest) -> CoreErrorResult<FeatureRequest> {
        self.insert(&feature_request).await?;
        log::debug!("Inserted feature request {}", feature_request.id);
        Ok(feature_request)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: FeatureRequestPatch,
    ) -> CoreErrorResult<Option<FeatureRequest>> {
        Ok(self.apply_patch(id, patch).await?)
    }

    async fn add_comment(&self, comment: Comment) -> CoreErrorResult<Comment> {
        self.insert_comment(&comment).await?;
        log::debug!(
            "Inserted comment {} on feature request {}",
            comment.id,
            comment.feature_request_id
        );
        Ok(comment)
    }

    async fn find_comments_by_feature_request_id(
        &self,
        feature_request_id: Uuid,
    ) -> CoreErrorResult<Vec<Comment>> {
        Ok(self.fetch_comments(feature_request_id).await?)
    }
}

fn row_to_feature_request(row: &SqliteRow) -> DbErrorResult<FeatureRequest> {
    const TABLE: &str = "feature_requests";

    let status: String = row.try_get("status")?;
    let priority: String = row.try_get("priority")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(FeatureRequest {
        id: parse_uuid(row, "id", TABLE)?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: Status::from_str(&status).map_err(|e| corrupt(TABLE, "status", e))?,
        priority: Priority::from_str(&priority).map_err(|e| corrupt(TABLE, "priority", e))?,
        created_at: parse_timestamp(&created_at, TABLE, "created_at")?,
        updated_at: parse_timestamp(&updated_at, TABLE, "updated_at")?,
    })
}

fn row_to_comment(row: &SqliteRow) -> DbErrorResult<Comment> {
    const TABLE: &str = "comments";

    let created_at: String = row.try_get("created_at")?;

    Ok(Comment {
        id: parse_uuid(row, "id", TABLE)?,
        feature_request_id: parse_uuid(row, "feature_request_id", TABLE)?,
        body: row.try_get("body")?,
        created_at: parse_timestamp(&created_at, TABLE, "created_at")?,
    })
}

#[track_caller]
fn parse_uuid(row: &SqliteRow, column: &'static str, table: &'static str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| corrupt(table, column, e))
}

#[track_caller]
fn corrupt(table: &'static str, column: &'static str, e: impl std::fmt::Display) -> DbError {
    DbError::Corrupt {
        table,
        column,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
