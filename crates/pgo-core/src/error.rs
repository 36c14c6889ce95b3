//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// The `String`/`&'static str` payloads are safe to show to API callers.
/// The repository cause of an `Internal` error is only meant for logs.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: RepoError,
    },
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(message: &'static str, source: RepoError) -> Self {
        Self::Internal { message, source }
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
