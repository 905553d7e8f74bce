//! Shared domain types for the DefecTrak backend.
//!
//! - [`error`] -- domain error taxonomy mapped to HTTP statuses by the API crate.
//! - [`types`] -- database id and timestamp aliases.
//! - [`roles`] -- well-known role labels and the authority-tag mapping.
//! - [`normalize`] -- label/status/email normalization helpers.

pub mod error;
pub mod normalize;
pub mod roles;
pub mod types;
