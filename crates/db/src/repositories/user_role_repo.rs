//! Repository for the `user_roles` table.

use defectrak_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_role::{CreateUserRole, UpdateUserRole, UserRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, role, status, created_at, updated_at";

/// Provides CRUD operations for user roles.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Insert a new role, returning the created row. The caller normalizes
    /// the label and status beforehand.
    pub async fn create(pool: &PgPool, input: &CreateUserRole) -> Result<UserRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_roles (role, status)
             VALUES ($1, COALESCE($2, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(&input.role)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_roles WHERE id = $1");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by label, compared case-insensitively.
    pub async fn find_by_role(pool: &PgPool, role: &str) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_roles WHERE lower(role) = lower($1)");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// List all roles ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_roles ORDER BY id ASC");
        sqlx::query_as::<_, UserRole>(&query).fetch_all(pool).await
    }

    /// List roles whose status is `active`.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<UserRole>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_roles WHERE status = 'active' ORDER BY id ASC");
        sqlx::query_as::<_, UserRole>(&query).fetch_all(pool).await
    }

    /// Update a role. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserRole,
    ) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!(
            "UPDATE user_roles SET
                role = COALESCE($2, role),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(id)
            .bind(&input.role)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a role by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve a role ID to its label.
    ///
    /// Errors with `RowNotFound` if the ID does not exist. The foreign key on
    /// `users.role_id` makes that unreachable for persisted users, so hitting
    /// it means the database is inconsistent.
    pub async fn resolve_label(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        Ok(Self::find_by_id(pool, role_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?
            .role)
    }
}
