//! reqres application - use cases and ports
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port
//! - The request execution use case
//! - The scenario catalog

pub mod catalog;
pub mod error;
pub mod execute_request;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
pub use execute_request::ExecuteRequest;
pub use ports::{HttpClient, HttpClientError};
