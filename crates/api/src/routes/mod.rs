pub mod account;
pub mod bug;
pub mod health;
pub mod priority;
pub mod status;
pub mod user;
pub mod user_role;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                        login (public)
/// /logout                       logout (requires auth)
/// /me                           get, update own record
/// /me/password                  change own password
///
/// /users                        list (admin), create (admin)
/// /users/register               self-registration (public)
/// /users/active                 list active users
/// /users/{id}                   get, update, delete
/// /users/{id}/password          change password (owner only)
///
/// /user-roles                   list (admin), create (admin)
/// /user-roles/active            list active roles
/// /user-roles/{id}              get, update, delete (admin for writes)
///
/// /priorities                   list (admin), create (admin)
/// /priorities/active            list active priorities
/// /priorities/{id}              get, update, delete (admin for writes)
///
/// /statuses                     list (admin), create (admin)
/// /statuses/active              list active statuses
/// /statuses/{id}                get, update, delete (admin for writes)
///
/// /bugs                         list, create
/// /bugs/{id}                    get, update, delete (admin for delete)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Session and self-service routes (login, logout, /me).
        .merge(account::router())
        // User management + public registration.
        .nest("/users", user::router())
        // Role catalog.
        .nest("/user-roles", user_role::router())
        // Priority catalog.
        .nest("/priorities", priority::router())
        // Status catalog.
        .nest("/statuses", status::router())
        // Bug reports.
        .nest("/bugs", bug::router())
}
