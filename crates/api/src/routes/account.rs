//! Route definitions for login, logout, and the `/me` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes merged directly into `/api` (no nesting prefix).
///
/// ```text
/// POST /login        -> login
/// POST /logout       -> logout
/// GET  /me           -> get_me
/// PUT  /me           -> update_me
/// PUT  /me/password  -> update_my_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(account::login))
        .route("/logout", post(account::logout))
        .route("/me", get(account::get_me).put(account::update_me))
        .route("/me/password", put(account::update_my_password))
}
