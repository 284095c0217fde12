use crate::notification::Notification;

/// Domain-level errors shared by the repository layer and the API.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist in the backing store.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// An entity's notification accumulated validation errors at the point
    /// a caller tried to persist it. Carries the full collector so the
    /// transport layer can flatten it into a message list.
    #[error("Entity validation error")]
    EntityValidation(Notification),

    /// An identifier string failed structural validation before any lookup.
    #[error("Validation failed (uuid is expected)")]
    InvalidId,

    /// A storage adapter failure. Never retried at this layer.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a [`CoreError::NotFound`] for the given entity type and id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
