//! Application error types

use reqres_domain::{DomainError, LookupError};
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A request failed validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An HTTP request failed in transport.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// A response body could not be read as expected.
    #[error("response error: {0}")]
    Lookup(#[from] LookupError),

    /// The requested scenario does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
