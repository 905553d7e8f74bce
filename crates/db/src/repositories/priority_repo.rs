//! Repository for the `priorities` table.

use defectrak_core::types::DbId;
use sqlx::PgPool;

use crate::models::priority::{CreatePriority, Priority, UpdatePriority};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, status, created_at, updated_at";

/// Provides CRUD operations for bug priorities.
pub struct PriorityRepo;

impl PriorityRepo {
    /// Insert a new priority, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePriority) -> Result<Priority, sqlx::Error> {
        let query = format!(
            "INSERT INTO priorities (label, status)
             VALUES ($1, COALESCE($2, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priority>(&query)
            .bind(&input.label)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a priority by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Priority>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priorities WHERE id = $1");
        sqlx::query_as::<_, Priority>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a priority by label, compared case-insensitively.
    pub async fn find_by_label(
        pool: &PgPool,
        label: &str,
    ) -> Result<Option<Priority>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priorities WHERE lower(label) = lower($1)");
        sqlx::query_as::<_, Priority>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// List all priorities ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Priority>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priorities ORDER BY id ASC");
        sqlx::query_as::<_, Priority>(&query).fetch_all(pool).await
    }

    /// List priorities whose status is `active`.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Priority>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM priorities WHERE status = 'active' ORDER BY id ASC");
        sqlx::query_as::<_, Priority>(&query).fetch_all(pool).await
    }

    /// Update a priority. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePriority,
    ) -> Result<Option<Priority>, sqlx::Error> {
        let query = format!(
            "UPDATE priorities SET
                label = COALESCE($2, label),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priority>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a priority by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM priorities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
