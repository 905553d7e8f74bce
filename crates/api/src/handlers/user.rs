//! Handlers for user management and public registration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use defectrak_core::error::CoreError;
use defectrak_core::normalize::{normalize_email, normalize_status, STATUS_ACTIVE};
use defectrak_core::roles::ROLE_GENERAL;
use defectrak_core::types::DbId;
use serde::Deserialize;

use defectrak_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use defectrak_db::repositories::{UserRepo, UserRoleRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::account::ChangePasswordRequest;
use crate::middleware::auth::Principal;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Maximum stored length of an email address.
const MAX_EMAIL_LEN: usize = 25;

/// Request body for `POST /api/users` and `POST /api/users/register`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Optional role reference; defaults to the `general` role when omitted.
    pub user_role_id: Option<DbId>,
}

/// Convert a full user row into its API representation.
pub(crate) fn user_to_response(user: User, role_label: String) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        role: role_label,
        role_id: user.role_id,
        status: user.status,
        created_at: user.created_at,
    }
}

/// Validate an already-normalized email address.
pub(crate) fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email must not be blank".into(),
        )));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Email must be at most {MAX_EMAIL_LEN} characters"
        ))));
    }
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "Email must contain '@'".into(),
        )));
    }
    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be blank"
        ))));
    }
    Ok(())
}

/// Resolve the role for a new user: an explicit `user_role_id` must exist
/// (400 BadReference otherwise), a missing one falls back to `general`.
async fn resolve_role_id(state: &AppState, requested: Option<DbId>) -> Result<DbId, AppError> {
    match requested {
        Some(id) => {
            UserRoleRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(CoreError::BadReference {
                    entity: "user_role",
                    id,
                })?;
            Ok(id)
        }
        None => {
            let role = UserRoleRepo::find_by_role(&state.pool, ROLE_GENERAL)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(format!("Default role '{ROLE_GENERAL}' is missing"))
                })?;
            Ok(role.id)
        }
    }
}

/// Shared insertion path for `register` and the admin `create_user`.
async fn insert_user(
    state: &AppState,
    input: CreateUserRequest,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let email = normalize_email(&input.email);
    validate_email(&email)?;
    validate_name("First name", &input.first_name)?;
    validate_name("Last name", &input.last_name)?;
    validate_password_strength(&input.password, state.config.auth.min_password_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Fast-path duplicate check; the unique index on lower(email) is the
    // backstop under concurrency.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }

    let role_id = resolve_role_id(state, input.user_role_id).await?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email,
        first_name: input.first_name,
        last_name: input.last_name,
        password_hash,
        role_id,
        status: STATUS_ACTIVE.to_string(),
    };
    let user = UserRepo::create(&state.pool, &create).await?;
    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user_to_response(user, role_label))))
}

/// POST /api/users/register
///
/// Public self-registration. The account is created active; the role
/// defaults to `general` when the request names none.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    insert_user(&state, input).await
}

/// POST /api/users (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    insert_user(&state, input).await
}

/// GET /api/users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
        out.push(user_to_response(user, role_label));
    }
    Ok(Json(out))
}

/// GET /api/users/active
pub async fn list_active_users(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list_active(&state.pool).await?;
    let mut out = Vec::with_capacity(users.len());
    for user in users {
        let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
        out.push(user_to_response(user, role_label));
    }
    Ok(Json(out))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?;
    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    Ok(Json(user_to_response(user, role_label)))
}

/// PUT /api/users/{id}
///
/// Admins may update any user and any field. A non-admin may update only
/// their own record, and may change neither the role reference nor the
/// account status.
pub async fn update_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?;

    if !principal.is_admin() {
        if principal.user_id != target.id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Cannot update another user".into(),
            )));
        }
        if matches!(input.user_role_id, Some(role_id) if role_id != target.role_id) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Cannot change own role".into(),
            )));
        }
        // Re-sending the current status is not a change, same as for the role.
        if matches!(input.status.as_deref(), Some(status) if normalize_status(status) != target.status)
        {
            return Err(AppError::Core(CoreError::Forbidden(
                "Cannot change own account status".into(),
            )));
        }
    }

    if let Some(ref email) = input.email {
        let email = normalize_email(email);
        validate_email(&email)?;
        // Collision check excludes the row being updated.
        if let Some(existing) = UserRepo::find_by_email(&state.pool, &email).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(
                    "A user with this email already exists".into(),
                )));
            }
        }
        input.email = Some(email);
    }
    if let Some(role_id) = input.user_role_id {
        UserRoleRepo::find_by_id(&state.pool, role_id)
            .await?
            .ok_or(CoreError::BadReference {
                entity: "user_role",
                id: role_id,
            })?;
    }
    if let Some(ref status) = input.status {
        input.status = Some(normalize_status(status));
    }

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?;
    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    Ok(Json(user_to_response(user, role_label)))
}

/// PUT /api/users/{id}/password
///
/// The caller's identity must match the target user's email; admins get no
/// exemption here.
pub async fn update_user_password(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<DbId>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "user", id })?;

    if principal.identity != target.email {
        return Err(AppError::Core(CoreError::Forbidden(
            "Can only change your own password".into(),
        )));
    }

    validate_password_strength(&input.password, state.config.auth.min_password_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, id, &hashed).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id} (admin only)
///
/// Fails with 409 if the user is still referenced, e.g. as a bug assignee.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "user", id }));
    }
    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
