//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches

pub mod bug;
pub mod priority;
pub mod session;
pub mod status;
pub mod user;
pub mod user_role;
