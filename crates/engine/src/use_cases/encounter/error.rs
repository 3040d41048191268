//! Shared error type for encounter use cases.

use skirmish_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Failure kinds an encounter operation can report.
#[derive(Debug, thiserror::Error)]
pub enum EncounterError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl EncounterError {
    /// Create a NotFound error with entity type and id context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

impl From<DomainError> for EncounterError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
        }
    }
}
