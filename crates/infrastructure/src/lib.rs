//! reqres infrastructure - adapters and implementations
//!
//! This crate provides the reqwest-backed `HttpClient` adapter and the
//! assertion runner.

pub mod adapters;
pub mod testing;

pub use adapters::{ClientSettings, ReqwestHttpClient};
pub use testing::TestRunner;
