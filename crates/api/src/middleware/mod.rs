//! Authentication and authorization middleware extractors.
//!
//! - [`auth::Principal`] -- Resolves the session token into the current
//!   principal (identity + authority tag).
//! - [`rbac::RequireAdmin`] -- Requires the `ROLE_ADMIN` authority.
//! - [`rbac::RequireAuth`] -- Requires any authenticated principal.

pub mod auth;
pub mod rbac;
