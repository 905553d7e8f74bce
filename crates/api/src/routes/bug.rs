//! Route definitions for the `/bugs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bug;
use crate::state::AppState;

/// Routes mounted at `/bugs`.
///
/// ```text
/// GET    /       -> list_bugs
/// POST   /       -> create_bug
/// GET    /{id}   -> get_bug
/// PUT    /{id}   -> update_bug
/// DELETE /{id}   -> delete_bug  (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bug::list_bugs).post(bug::create_bug))
        .route(
            "/{id}",
            get(bug::get_bug).put(bug::update_bug).delete(bug::delete_bug),
        )
}
