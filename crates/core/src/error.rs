use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every variant except [`CoreError::NotFound`] and [`CoreError::Internal`]
/// is a rejected write: the request is refused and nothing is persisted.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{field} {reason}")]
    OutOfRange { field: String, reason: String },

    #[error("Invalid breed: {0}")]
    InvalidBreed(String),

    #[error("Could not validate breed: {0}")]
    ValidationUnavailable(String),

    #[error("Mission must have between 1 and 3 targets, got {0}")]
    InvalidTargetCount(usize),

    #[error("Cat {0} is already on an incomplete mission")]
    CatUnavailable(DbId),

    #[error("Mission {mission_id} already has cat {cat_id} assigned")]
    AlreadyAssigned { mission_id: DbId, cat_id: DbId },

    #[error("Mission {0} has a cat in the field and cannot be deleted")]
    MissionInProgress(DbId),

    #[error("Target {0} is complete and can no longer be modified")]
    TargetFinalized(DbId),

    #[error("Validation failed on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The request field a rejection is attributed to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::OutOfRange { field, .. } => Some(field),
            CoreError::InvalidBreed(_) | CoreError::ValidationUnavailable(_) => Some("breed"),
            CoreError::InvalidTargetCount(_) => Some("targets"),
            CoreError::CatUnavailable(_) | CoreError::AlreadyAssigned { .. } => Some("cat"),
            CoreError::Validation { field, .. } => Some(field),
            CoreError::TargetFinalized(_) => Some("is_complete"),
            CoreError::NotFound { .. }
            | CoreError::MissionInProgress(_)
            | CoreError::Internal(_) => None,
        }
    }
}
