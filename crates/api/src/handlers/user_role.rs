//! Handlers for the user role catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use defectrak_core::error::CoreError;
use defectrak_core::normalize::{normalize_label, normalize_status};
use defectrak_core::types::DbId;

use defectrak_db::models::user_role::{CreateUserRole, UpdateUserRole, UserRole};
use defectrak_db::repositories::UserRoleRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_label;
use crate::middleware::auth::Principal;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/user-roles (admin only)
pub async fn create_user_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<CreateUserRole>,
) -> AppResult<(StatusCode, Json<UserRole>)> {
    input.role = normalize_label(&input.role);
    validate_label("Role", &input.role)?;
    if UserRoleRepo::find_by_role(&state.pool, &input.role)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A role with this label already exists".into(),
        )));
    }
    input.status = input.status.as_deref().map(normalize_status);

    let role = UserRoleRepo::create(&state.pool, &input).await?;
    tracing::info!(role_id = role.id, role = %role.role, "role created");
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /api/user-roles (admin only)
pub async fn list_user_roles(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserRole>>> {
    Ok(Json(UserRoleRepo::list(&state.pool).await?))
}

/// GET /api/user-roles/active
pub async fn list_active_user_roles(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<Vec<UserRole>>> {
    Ok(Json(UserRoleRepo::list_active(&state.pool).await?))
}

/// GET /api/user-roles/{id}
pub async fn get_user_role(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserRole>> {
    let role = UserRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user_role",
            id,
        })?;
    Ok(Json(role))
}

/// PUT /api/user-roles/{id} (admin only)
pub async fn update_user_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateUserRole>,
) -> AppResult<Json<UserRole>> {
    if let Some(ref role) = input.role {
        let role = normalize_label(role);
        validate_label("Role", &role)?;
        // Collision check excludes the row being updated.
        if let Some(existing) = UserRoleRepo::find_by_role(&state.pool, &role).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(
                    "A role with this label already exists".into(),
                )));
            }
        }
        input.role = Some(role);
    }
    input.status = input.status.as_deref().map(normalize_status);

    let role = UserRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user_role",
            id,
        })?;
    Ok(Json(role))
}

/// DELETE /api/user-roles/{id} (admin only)
///
/// Fails with 409 if users still reference the role.
pub async fn delete_user_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRoleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "user_role",
            id,
        }));
    }
    tracing::info!(role_id = id, "role deleted");
    Ok(StatusCode::NO_CONTENT)
}
