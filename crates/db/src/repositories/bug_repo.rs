//! Repository for the `bugs` table.

use defectrak_core::types::DbId;
use sqlx::PgPool;

use crate::models::bug::{Bug, CreateBug, UpdateBug};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, priority_id, status_id, assignee_id, \
                        created_by_user_id, created_at, updated_at";

/// Provides CRUD operations for bugs.
pub struct BugRepo;

impl BugRepo {
    /// Insert a new bug, returning the created row. `created_at` is set by
    /// the database.
    pub async fn create(pool: &PgPool, input: &CreateBug) -> Result<Bug, sqlx::Error> {
        let query = format!(
            "INSERT INTO bugs (title, description, priority_id, status_id, assignee_id, created_by_user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bug>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority_id)
            .bind(input.status_id)
            .bind(input.assignee_id)
            .bind(input.created_by_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a bug by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bugs WHERE id = $1");
        sqlx::query_as::<_, Bug>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bugs ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Bug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bugs ORDER BY created_at DESC");
        sqlx::query_as::<_, Bug>(&query).fetch_all(pool).await
    }

    /// Update a bug. Only non-`None` fields in `input` are applied.
    /// `created_at` and `created_by_user_id` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBug,
    ) -> Result<Option<Bug>, sqlx::Error> {
        let query = format!(
            "UPDATE bugs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                priority_id = COALESCE($4, priority_id),
                status_id = COALESCE($5, status_id),
                assignee_id = COALESCE($6, assignee_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bug>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority_id)
            .bind(input.status_id)
            .bind(input.assignee_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bug by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bugs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
