//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use defectrak_core::error::CoreError;
use defectrak_core::roles::{authority_tag, AUTHORITY_ADMIN};
use defectrak_core::types::DbId;
use defectrak_db::repositories::{SessionRepo, UserRepo, UserRoleRepo};

use crate::auth::session::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// The resolved principal for the current request: identity plus authority,
/// built from the session token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(principal: Principal) -> AppResult<Json<()>> {
///     tracing::info!(user_id = principal.user_id, authority = %principal.authority, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The account's active status is verified at login only; a session for an
/// account disabled afterwards stays usable until it expires or is revoked.
#[derive(Debug, Clone)]
pub struct Principal {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's normalized email, used for self-ownership checks.
    pub identity: String,
    /// Standardized authority tag (e.g. `"ROLE_ADMIN"`, `"ROLE_GENERAL"`).
    pub authority: String,
}

impl Principal {
    /// Whether this principal carries the administrator authority.
    pub fn is_admin(&self) -> bool {
        self.authority == AUTHORITY_ADMIN
    }
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let hash = hash_session_token(token);
        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Session user no longer exists".into()))
            })?;

        let role_label = UserRoleRepo::resolve_label(&state.pool, user.role_id).await?;

        Ok(Principal {
            user_id: user.id,
            identity: user.email,
            authority: authority_tag(&role_label),
        })
    }
}
