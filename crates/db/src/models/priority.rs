//! Bug priority entity model and DTOs.

use defectrak_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A priority row from the `priorities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Priority {
    pub id: DbId,
    /// Priority label, stored lowercase (e.g. `"low"`, `"critical"`).
    pub label: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new priority.
#[derive(Debug, Deserialize)]
pub struct CreatePriority {
    pub label: String,
    pub status: Option<String>,
}

/// DTO for updating an existing priority. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePriority {
    pub label: Option<String>,
    pub status: Option<String>,
}
