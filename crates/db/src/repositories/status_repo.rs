//! Repository for the `statuses` table.

use defectrak_core::types::DbId;
use sqlx::PgPool;

use crate::models::status::{CreateStatus, Status, UpdateStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, status, created_at, updated_at";

/// Provides CRUD operations for bug workflow statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// Insert a new status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStatus) -> Result<Status, sqlx::Error> {
        let query = format!(
            "INSERT INTO statuses (label, status)
             VALUES ($1, COALESCE($2, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(&input.label)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a status by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a status by label, compared case-insensitively.
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE lower(label) = lower($1)");
        sqlx::query_as::<_, Status>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// List all statuses ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses ORDER BY id ASC");
        sqlx::query_as::<_, Status>(&query).fetch_all(pool).await
    }

    /// List statuses whose status is `active`.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Status>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM statuses WHERE status = 'active' ORDER BY id ASC");
        sqlx::query_as::<_, Status>(&query).fetch_all(pool).await
    }

    /// Update a status. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStatus,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE statuses SET
                label = COALESCE($2, label),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a status by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
