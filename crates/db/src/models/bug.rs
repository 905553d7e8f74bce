//! Bug entity model and DTOs.

use defectrak_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bug row from the `bugs` table.
///
/// All entity references are plain foreign-key ids; the referenced rows have
/// independent lifecycles.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bug {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
    pub created_by_user_id: Option<DbId>,
    /// Set at creation, immutable thereafter.
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new bug. Referenced ids are validated by the handler
/// before insert.
#[derive(Debug, Deserialize)]
pub struct CreateBug {
    pub title: String,
    pub description: Option<String>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
    pub created_by_user_id: Option<DbId>,
}

/// DTO for updating an existing bug. `created_at` and `created_by_user_id`
/// are deliberately absent: they are immutable after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateBug {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority_id: Option<DbId>,
    pub status_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
}
