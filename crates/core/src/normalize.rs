//! Normalization rules applied before persisting labels, statuses, and emails.
//!
//! The project-wide convention is "store normalized lowercase, compare
//! normalized": every label-bearing entity (role, priority, status) and every
//! email is lowered and trimmed before it reaches the database, and the
//! case-insensitive unique indexes (`uq_*` on `lower(...)`) are the final
//! arbiter for duplicates.

/// The entity status value that marks a record as active.
pub const STATUS_ACTIVE: &str = "active";

/// Normalize a user-supplied label (role name, priority label, status label).
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Normalize an entity status string. Statuses are free-form but always
/// stored lowercase so `"Active"` and `"active"` are the same state.
pub fn normalize_status(status: &str) -> String {
    status.trim().to_lowercase()
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether a normalized entity status marks the record as active.
pub fn is_active(status: &str) -> bool {
    status.eq_ignore_ascii_case(STATUS_ACTIVE)
}
