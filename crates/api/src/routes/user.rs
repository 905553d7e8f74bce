//! Route definitions for the `/users` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                -> list_users            (admin)
/// POST   /                -> create_user           (admin)
/// POST   /register        -> register              (public)
/// GET    /active          -> list_active_users
/// GET    /{id}            -> get_user
/// PUT    /{id}            -> update_user           (admin or self)
/// DELETE /{id}            -> delete_user           (admin)
/// PUT    /{id}/password   -> update_user_password  (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users).post(user::create_user))
        .route("/register", post(user::register))
        .route("/active", get(user::list_active_users))
        .route(
            "/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/{id}/password", put(user::update_user_password))
}
