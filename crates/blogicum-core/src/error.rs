//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Internal error: {0}")]
    Internal(String),
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

    #[error("Referenced entity does not exist: {0}")]
    MissingReference(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<std::convert::Infallible> for RepoError {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => RepoError::Validation(msg),
            DomainError::NotFound { .. } => RepoError::NotFound,
            DomainError::Duplicate(msg) => RepoError::Constraint(msg),
            DomainError::Internal(msg) => RepoError::Query(msg),
        }
    }
}
