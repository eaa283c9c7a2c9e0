//! Response assertions and their results.

use serde::{Deserialize, Serialize};

/// A check to run against a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    /// Status code equals a literal.
    StatusCode {
        /// Expected status code.
        expected: u16,
    },
    /// Body has some content.
    BodyNotEmpty,
    /// JSON field, rendered as text, equals a literal.
    JsonEquals {
        /// Dotted path (e.g., "data.id").
        path: String,
        /// Expected text form of the value.
        expected: String,
    },
    /// JSON field is present and non-null.
    JsonPresent {
        /// Dotted path (e.g., "token").
        path: String,
    },
}

impl Assertion {
    /// Expects an exact status code.
    #[must_use]
    pub const fn status(expected: u16) -> Self {
        Self::StatusCode { expected }
    }

    /// Expects a JSON field to equal a literal.
    #[must_use]
    pub fn json_equals(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::JsonEquals {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Expects a JSON field to be present and non-null.
    #[must_use]
    pub fn json_present(path: impl Into<String>) -> Self {
        Self::JsonPresent { path: path.into() }
    }

    /// Get a human-readable description of this assertion.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::StatusCode { expected } => format!("status code is {expected}"),
            Self::BodyNotEmpty => "body is not empty".to_string(),
            Self::JsonEquals { path, expected } => format!("JSON {path} equals \"{expected}\""),
            Self::JsonPresent { path } => format!("JSON {path} is present and non-null"),
        }
    }
}

/// Result of running a single assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssertionResult {
    /// The assertion that was run.
    pub assertion: Assertion,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Actual value found, kept for diagnostics only.
    pub actual: Option<String>,
    /// Failure message naming the violated expectation.
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result with actual value.
    #[must_use]
    pub fn pass_with_value(assertion: Assertion, actual: impl Into<String>) -> Self {
        Self {
            assertion,
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result; the message is built from the description.
    #[must_use]
    pub fn fail(assertion: Assertion, reason: impl AsRef<str>) -> Self {
        let error = format!("expected {}: {}", assertion.description(), reason.as_ref());
        Self {
            assertion,
            passed: false,
            actual: None,
            error: Some(error),
        }
    }

    /// Create a failed result with actual value.
    #[must_use]
    pub fn fail_with_value(
        assertion: Assertion,
        actual: impl Into<String>,
        reason: impl AsRef<str>,
    ) -> Self {
        Self {
            actual: Some(actual.into()),
            ..Self::fail(assertion, reason)
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario that was run.
    pub scenario: String,
    /// Status code received.
    pub status: u16,
    /// Individual assertion results.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Round-trip time of the request in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioReport {
    /// Create a report from assertion results.
    #[must_use]
    pub fn new(
        scenario: impl Into<String>,
        status: u16,
        results: Vec<AssertionResult>,
        duration_ms: u64,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();

        Self {
            scenario: scenario.into(),
            status,
            results,
            total,
            passed,
            failed: total - passed,
            duration_ms,
        }
    }

    /// Check if all assertions passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Failure messages of the failed assertions, in order.
    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(|r| r.error.as_deref())
    }

    /// Failure messages joined into one line.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        self.failures().collect::<Vec<_>>().join("; ")
    }
}
