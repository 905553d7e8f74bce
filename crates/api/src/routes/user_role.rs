//! Route definitions for the `/user-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_role;
use crate::state::AppState;

/// Routes mounted at `/user-roles`.
///
/// ```text
/// GET    /         -> list_user_roles         (admin)
/// POST   /         -> create_user_role        (admin)
/// GET    /active   -> list_active_user_roles
/// GET    /{id}     -> get_user_role
/// PUT    /{id}     -> update_user_role        (admin)
/// DELETE /{id}     -> delete_user_role        (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_role::list_user_roles).post(user_role::create_user_role),
        )
        .route("/active", get(user_role::list_active_user_roles))
        .route(
            "/{id}",
            get(user_role::get_user_role)
                .put(user_role::update_user_role)
                .delete(user_role::delete_user_role),
        )
}
