//! reqres domain - core probe types
//!
//! Requests, responses, JSON documents and assertions for probing the
//! reqres REST API. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod json;
pub mod request;
pub mod response;
pub mod scenario;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use json::{JsonDocument, LookupError};
pub use request::{HttpMethod, QueryParam, RequestSpec};
pub use response::ResponseSpec;
pub use scenario::Scenario;
pub use testing::{Assertion, AssertionResult, ScenarioReport};
