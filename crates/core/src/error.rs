use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every variant is recoverable: a failed operation rolls back and leaves
/// state untouched. The API layer maps each variant to an HTTP status and a
/// stable error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A transition was attempted from a terminal state, or a precondition
    /// on the subject's current state does not hold (e.g. book already
    /// unavailable).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Duplicate of something that must be unique (pending request, review,
    /// email address).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
