//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod bug_repo;
pub mod priority_repo;
pub mod session_repo;
pub mod status_repo;
pub mod user_repo;
pub mod user_role_repo;

pub use bug_repo::BugRepo;
pub use priority_repo::PriorityRepo;
pub use session_repo::SessionRepo;
pub use status_repo::StatusRepo;
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
