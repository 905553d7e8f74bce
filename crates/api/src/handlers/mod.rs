//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `defectrak_db` and
//! map errors via [`crate::error::AppError`].

pub mod account;
pub mod bug;
pub mod priority;
pub mod status;
pub mod user;
pub mod user_role;

use defectrak_core::error::CoreError;

use crate::error::AppError;

/// Maximum stored length of catalog labels (roles, priorities, statuses).
const MAX_LABEL_LEN: usize = 25;

/// Validate an already-normalized catalog label.
pub(crate) fn validate_label(field: &str, label: &str) -> Result<(), AppError> {
    if label.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be blank"
        ))));
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must be at most {MAX_LABEL_LEN} characters"
        ))));
    }
    Ok(())
}
