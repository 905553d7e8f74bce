use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A foreign id supplied in a request body does not exist.
    ///
    /// Distinct from [`CoreError::NotFound`]: a missing *target* resource is
    /// a 404, a missing *referenced* resource is a 400.
    #[error("Bad reference: {entity} with id {id} does not exist")]
    BadReference { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
