use crate::types::EntityId;

/// Failure reported by a persistence collaborator.
///
/// Absence is never an error at this boundary: lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness or state constraint rejected the write.
    #[error("Constraint violated: {constraint}")]
    Conflict { constraint: String },

    /// Anything else the backend reported (connection loss, timeouts, ...).
    #[error("Storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Nothing to do: {0}")]
    EmptyState(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Error returned when no reception is in progress for a pickup point.
    pub fn no_active_reception(pickup_point_id: EntityId) -> Self {
        CoreError::EmptyState(format!(
            "no active reception for pickup point {pickup_point_id}"
        ))
    }
}
