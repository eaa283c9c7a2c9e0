//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or validating requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The relative request path is empty or not rooted.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The request body is invalid for the given method.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
