//! Assertion evaluation.

mod runner;

pub use runner::TestRunner;
