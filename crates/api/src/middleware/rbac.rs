//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`Principal`] and rejects requests whose authority
//! does not meet the minimum requirement. Use these in route handlers to
//! enforce authorization at the type level. Because the check needs no
//! resource data, it runs before any database lookup for the target resource.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use defectrak_core::error::CoreError;

use super::auth::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `ROLE_ADMIN` authority. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(principal): RequireAdmin) -> AppResult<Json<()>> {
///     // principal is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Principal);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        if !principal.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(principal))
    }
}

/// Requires any authenticated principal (any valid role).
///
/// Functionally equivalent to [`Principal`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
///
/// ```ignore
/// async fn any_authed(RequireAuth(principal): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub Principal);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        Ok(RequireAuth(principal))
    }
}
