//! Bug workflow status entity model and DTOs.
//!
//! The `status` field on this entity is its own active/inactive flag; the
//! `label` field is the workflow state name bugs reference (e.g. `"open"`).

use defectrak_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A status row from the `statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Status {
    pub id: DbId,
    pub label: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new status.
#[derive(Debug, Deserialize)]
pub struct CreateStatus {
    pub label: String,
    pub status: Option<String>,
}

/// DTO for updating an existing status. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub label: Option<String>,
    pub status: Option<String>,
}
