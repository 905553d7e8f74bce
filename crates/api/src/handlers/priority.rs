//! Handlers for the bug priority catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use defectrak_core::error::CoreError;
use defectrak_core::normalize::{normalize_label, normalize_status};
use defectrak_core::types::DbId;

use defectrak_db::models::priority::{CreatePriority, Priority, UpdatePriority};
use defectrak_db::repositories::PriorityRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_label;
use crate::middleware::auth::Principal;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/priorities (admin only)
pub async fn create_priority(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<CreatePriority>,
) -> AppResult<(StatusCode, Json<Priority>)> {
    input.label = normalize_label(&input.label);
    validate_label("Label", &input.label)?;
    if PriorityRepo::find_by_label(&state.pool, &input.label)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A priority with this label already exists".into(),
        )));
    }
    input.status = input.status.as_deref().map(normalize_status);

    let priority = PriorityRepo::create(&state.pool, &input).await?;
    tracing::info!(priority_id = priority.id, label = %priority.label, "priority created");
    Ok((StatusCode::CREATED, Json(priority)))
}

/// GET /api/priorities (admin only)
pub async fn list_priorities(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Priority>>> {
    Ok(Json(PriorityRepo::list(&state.pool).await?))
}

/// GET /api/priorities/active
pub async fn list_active_priorities(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<Vec<Priority>>> {
    Ok(Json(PriorityRepo::list_active(&state.pool).await?))
}

/// GET /api/priorities/{id}
pub async fn get_priority(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
) -> AppResult<Json<Priority>> {
    let priority = PriorityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "priority",
            id,
        })?;
    Ok(Json(priority))
}

/// PUT /api/priorities/{id} (admin only)
pub async fn update_priority(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePriority>,
) -> AppResult<Json<Priority>> {
    if let Some(ref label) = input.label {
        let label = normalize_label(label);
        validate_label("Label", &label)?;
        // Collision check excludes the row being updated.
        if let Some(existing) = PriorityRepo::find_by_label(&state.pool, &label).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(
                    "A priority with this label already exists".into(),
                )));
            }
        }
        input.label = Some(label);
    }
    input.status = input.status.as_deref().map(normalize_status);

    let priority = PriorityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "priority",
            id,
        })?;
    Ok(Json(priority))
}

/// DELETE /api/priorities/{id} (admin only)
///
/// Fails with 409 if bugs still reference the priority.
pub async fn delete_priority(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PriorityRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "priority",
            id,
        }));
    }
    tracing::info!(priority_id = id, "priority deleted");
    Ok(StatusCode::NO_CONTENT)
}
