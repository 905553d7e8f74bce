//! Handlers for bug reports.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use defectrak_core::error::CoreError;
use defectrak_core::types::DbId;

use defectrak_db::models::bug::{Bug, CreateBug, UpdateBug};
use defectrak_db::repositories::{BugRepo, PriorityRepo, StatusRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::Principal;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Maximum stored length of a bug title.
const MAX_TITLE_LEN: usize = 255;
/// Maximum stored length of a bug description.
const MAX_DESCRIPTION_LEN: usize = 4000;

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be blank".into(),
        )));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        ))));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        ))));
    }
    Ok(())
}

/// Check every entity reference the payload names. An id pointing at a
/// missing row is the caller's mistake, so it surfaces as 400 BadReference
/// rather than 404.
async fn validate_references(
    state: &AppState,
    priority_id: Option<DbId>,
    status_id: Option<DbId>,
    assignee_id: Option<DbId>,
    created_by_user_id: Option<DbId>,
) -> Result<(), AppError> {
    if let Some(id) = priority_id {
        PriorityRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::BadReference {
                entity: "priority",
                id,
            })?;
    }
    if let Some(id) = status_id {
        StatusRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::BadReference {
                entity: "status",
                id,
            })?;
    }
    if let Some(id) = assignee_id {
        UserRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::BadReference { entity: "user", id })?;
    }
    if let Some(id) = created_by_user_id {
        UserRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::BadReference { entity: "user", id })?;
    }
    Ok(())
}

/// POST /api/bugs
///
/// Any authenticated user may file a bug. When the payload does not name a
/// creator, the authenticated principal is recorded as one.
pub async fn create_bug(
    State(state): State<AppState>,
    principal: Principal,
    Json(mut input): Json<CreateBug>,
) -> AppResult<(StatusCode, Json<Bug>)> {
    validate_title(&input.title)?;
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }
    validate_references(
        &state,
        input.priority_id,
        input.status_id,
        input.assignee_id,
        input.created_by_user_id,
    )
    .await?;

    if input.created_by_user_id.is_none() {
        input.created_by_user_id = Some(principal.user_id);
    }

    let bug = BugRepo::create(&state.pool, &input).await?;
    tracing::info!(bug_id = bug.id, "bug created");
    Ok((StatusCode::CREATED, Json(bug)))
}

/// GET /api/bugs
pub async fn list_bugs(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<Vec<Bug>>> {
    Ok(Json(BugRepo::list(&state.pool).await?))
}

/// GET /api/bugs/{id}
pub async fn get_bug(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bug>> {
    let bug = BugRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "bug", id })?;
    Ok(Json(bug))
}

/// PUT /api/bugs/{id}
///
/// `created_at` and the creator reference are immutable; the update DTO does
/// not carry them.
pub async fn update_bug(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBug>,
) -> AppResult<Json<Bug>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }
    validate_references(
        &state,
        input.priority_id,
        input.status_id,
        input.assignee_id,
        None,
    )
    .await?;

    let bug = BugRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "bug", id })?;
    Ok(Json(bug))
}

/// DELETE /api/bugs/{id} (admin only)
pub async fn delete_bug(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BugRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "bug", id }));
    }
    tracing::info!(bug_id = id, "bug deleted");
    Ok(StatusCode::NO_CONTENT)
}
