//! Handlers for login, logout, and the `/me` self-service resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use defectrak_core::error::CoreError;
use defectrak_core::normalize::{is_active, normalize_email};
use serde::{Deserialize, Serialize};

use defectrak_db::models::session::CreateSession;
use defectrak_db::models::user::{UpdateUser, UserResponse};
use defectrak_db::repositories::{SessionRepo, UserRepo, UserRoleRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::handlers::user::{user_to_response, validate_email};
use crate::middleware::auth::Principal;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
///
/// Both fields are required; they are `Option` so that a missing field can be
/// surfaced as the same generic authentication failure as bad credentials
/// instead of a deserialization error that leaks payload structure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token; present it as a `Bearer` credential.
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Request body for `PUT /api/me`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `PUT /api/me/password` and `PUT /api/users/{id}/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
}

/// The uniform login failure. Whether the email was unknown, the password
/// wrong, the account disabled, or a field missing is logged server-side but
/// never revealed to the caller.
fn generic_auth_failure() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with email + password. On success, creates a server-side
/// session and returns its opaque token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Both credential fields must be present.
    let (Some(email), Some(password)) = (input.email, input.password) else {
        tracing::debug!("login rejected: missing email or password field");
        return Err(generic_auth_failure());
    };

    // 2. Find the user by normalized email.
    let email = normalize_email(&email);
    let Some(user) = UserRepo::find_by_email(&state.pool, &email).await? else {
        tracing::debug!(%email, "login rejected: unknown email");
        return Err(generic_auth_failure());
    };

    // 3. Only active accounts may log in. This is the single place the
    //    status is checked; established sessions are not re-validated.
    if !is_active(&user.status) {
        tracing::debug!(user_id = user.id, "login rejected: account disabled");
        return Err(generic_auth_failure());
    }

    // 4. Verify the password against the stored hash.
    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "login rejected: wrong password");
        return Err(generic_auth_failure());
    }

    // 5. Create the session.
    let (token, token_hash) = generate_session_token();
    let ttl_hours = state.config.auth.session_ttl_hours;
    let session_input = CreateSession {
        user_id: user.id,
        token_hash,
        expires_at: Utc::now() + chrono::Duration::hours(ttl_hours),
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    tracing::info!(user_id = user.id, "login succeeded");

    Ok(Json(LoginResponse {
        token,
        expires_in: ttl_hours * 3600,
        user: user_to_response(user, role_label),
    }))
}

/// POST /api/logout
///
/// Revoke all sessions for the authenticated principal. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, principal: Principal) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, principal.user_id).await?;
    tracing::debug!(user_id = principal.user_id, revoked, "sessions revoked");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/me
///
/// Return the authenticated principal's own user record.
pub async fn get_me(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, principal.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: principal.user_id,
        })?;
    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    Ok(Json(user_to_response(user, role_label)))
}

/// PUT /api/me
///
/// Update the authenticated principal's own profile fields. The role and
/// account status cannot be changed through this endpoint.
pub async fn update_me(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let email = match input.email {
        Some(e) => {
            let e = normalize_email(&e);
            validate_email(&e)?;
            Some(e)
        }
        None => None,
    };

    let update = UpdateUser {
        email,
        first_name: input.first_name,
        last_name: input.last_name,
        user_role_id: None,
        status: None,
    };
    let user = UserRepo::update(&state.pool, principal.user_id, &update)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "user",
            id: principal.user_id,
        })?;
    let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;
    Ok(Json(user_to_response(user, role_label)))
}

/// PUT /api/me/password
///
/// Change the authenticated principal's own password.
pub async fn update_my_password(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.password, state.config.auth.min_password_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, principal.user_id, &hashed).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: principal.user_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
