//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The referenced entity does not exist.
    #[error("{message}")]
    NotFound {
        entity_type: &'static str,
        id: Uuid,
        message: &'static str,
    },

    /// The entity exists but the requested transition is not allowed from its current state.
    #[error("{0}")]
    InvalidState(String),

    /// The input is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: Uuid, message: &'static str) -> Self {
        Self::NotFound {
            entity_type,
            id,
            message,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_its_message() {
        let err = DomainError::not_found("Post", Uuid::nil(), "Invalid postId supplied");
        assert_eq!(err.to_string(), "Invalid postId supplied");
    }

    #[test]
    fn repo_errors_convert_transparently() {
        let err: DomainError = RepoError::Query("boom".to_string()).into();
        assert!(matches!(err, DomainError::Repository(RepoError::Query(_))));
        assert_eq!(err.to_string(), "Query execution failed: boom");
    }
}
