//! Route definitions for the `/priorities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::priority;
use crate::state::AppState;

/// Routes mounted at `/priorities`.
///
/// ```text
/// GET    /         -> list_priorities         (admin)
/// POST   /         -> create_priority         (admin)
/// GET    /active   -> list_active_priorities
/// GET    /{id}     -> get_priority
/// PUT    /{id}     -> update_priority         (admin)
/// DELETE /{id}     -> delete_priority         (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(priority::list_priorities).post(priority::create_priority),
        )
        .route("/active", get(priority::list_active_priorities))
        .route(
            "/{id}",
            get(priority::get_priority)
                .put(priority::update_priority)
                .delete(priority::delete_priority),
        )
}
