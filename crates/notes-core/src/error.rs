//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Every variant keeps the message reported by the underlying store.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// The store's own message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Constraint(msg) => msg,
        }
    }
}
