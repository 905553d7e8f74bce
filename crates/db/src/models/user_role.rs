//! User role entity model and DTOs.

use defectrak_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A role row from the `user_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRole {
    pub id: DbId,
    /// Role label, stored lowercase (e.g. `"admin"`, `"general"`).
    pub role: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new role.
#[derive(Debug, Deserialize)]
pub struct CreateUserRole {
    pub role: String,
    pub status: Option<String>,
}

/// DTO for updating an existing role. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRole {
    pub role: Option<String>,
    pub status: Option<String>,
}
