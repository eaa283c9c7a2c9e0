//! Scenarios: one request plus the checks made on its response.

use serde::{Deserialize, Serialize};

use crate::request::RequestSpec;
use crate::testing::Assertion;

/// One independent test case exercising a single HTTP interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique scenario name.
    pub name: String,
    /// Request to send.
    pub request: RequestSpec,
    /// Checks run against the response, in order.
    pub assertions: Vec<Assertion>,
}

impl Scenario {
    /// Creates a scenario with no assertions.
    #[must_use]
    pub fn new(name: impl Into<String>, request: RequestSpec) -> Self {
        let name = name.into();
        Self {
            request: request.named(name.clone()),
            name,
            assertions: Vec::new(),
        }
    }

    /// Adds an assertion (builder pattern).
    #[must_use]
    pub fn expect(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Expects an exact status code.
    #[must_use]
    pub fn expect_status(self, status: u16) -> Self {
        self.expect(Assertion::status(status))
    }

    /// Expects a non-empty body.
    #[must_use]
    pub fn expect_body(self) -> Self {
        self.expect(Assertion::BodyNotEmpty)
    }

    /// Expects a JSON field to equal a literal.
    #[must_use]
    pub fn expect_json(self, path: &str, expected: &str) -> Self {
        self.expect(Assertion::json_equals(path, expected))
    }

    /// Expects a JSON field to be present and non-null.
    #[must_use]
    pub fn expect_present(self, path: &str) -> Self {
        self.expect(Assertion::json_present(path))
    }
}
