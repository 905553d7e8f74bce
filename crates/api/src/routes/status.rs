//! Route definitions for the `/statuses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Routes mounted at `/statuses`.
///
/// ```text
/// GET    /         -> list_statuses         (admin)
/// POST   /         -> create_status         (admin)
/// GET    /active   -> list_active_statuses
/// GET    /{id}     -> get_status
/// PUT    /{id}     -> update_status         (admin)
/// DELETE /{id}     -> delete_status         (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status::list_statuses).post(status::create_status))
        .route("/active", get(status::list_active_statuses))
        .route(
            "/{id}",
            get(status::get_status)
                .put(status::update_status)
                .delete(status::delete_status),
        )
}
