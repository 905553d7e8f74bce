//! Handlers for the bug status catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use defectrak_core::error::CoreError;
use defectrak_core::normalize::{normalize_label, normalize_status};
use defectrak_core::types::DbId;

use defectrak_db::models::status::{CreateStatus, Status, UpdateStatus};
use defectrak_db::repositories::StatusRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_label;
use crate::middleware::auth::Principal;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/statuses (admin only)
pub async fn create_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<CreateStatus>,
) -> AppResult<(StatusCode, Json<Status>)> {
    input.label = normalize_label(&input.label);
    validate_label("Label", &input.label)?;
    if StatusRepo::find_by_label(&state.pool, &input.label)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A status with this label already exists".into(),
        )));
    }
    input.status = input.status.as_deref().map(normalize_status);

    let status = StatusRepo::create(&state.pool, &input).await?;
    tracing::info!(status_id = status.id, label = %status.label, "status created");
    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /api/statuses (admin only)
pub async fn list_statuses(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Status>>> {
    Ok(Json(StatusRepo::list(&state.pool).await?))
}

/// GET /api/statuses/active
pub async fn list_active_statuses(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<Vec<Status>>> {
    Ok(Json(StatusRepo::list_active(&state.pool).await?))
}

/// GET /api/statuses/{id}
pub async fn get_status(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
) -> AppResult<Json<Status>> {
    let status = StatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "status",
            id,
        })?;
    Ok(Json(status))
}

/// PUT /api/statuses/{id} (admin only)
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateStatus>,
) -> AppResult<Json<Status>> {
    if let Some(ref label) = input.label {
        let label = normalize_label(label);
        validate_label("Label", &label)?;
        // Collision check excludes the row being updated.
        if let Some(existing) = StatusRepo::find_by_label(&state.pool, &label).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(
                    "A status with this label already exists".into(),
                )));
            }
        }
        input.label = Some(label);
    }
    input.status = input.status.as_deref().map(normalize_status);

    let status = StatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "status",
            id,
        })?;
    Ok(Json(status))
}

/// DELETE /api/statuses/{id} (admin only)
///
/// Fails with 409 if bugs still reference the status.
pub async fn delete_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StatusRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "status",
            id,
        }));
    }
    tracing::info!(status_id = id, "status deleted");
    Ok(StatusCode::NO_CONTENT)
}
