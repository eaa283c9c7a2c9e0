//! Test runner implementation.
//!
//! Evaluates a scenario's assertions against the response it received and
//! produces a report.

use std::cell::OnceCell;

use reqres_domain::{
    Assertion, AssertionResult, JsonDocument, LookupError, ResponseSpec, Scenario, ScenarioReport,
};

/// Test runner that executes assertions against responses.
///
/// Every assertion is evaluated, so a report lists all broken expectations
/// rather than only the first one.
#[derive(Debug, Default)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run every assertion of a scenario against a response.
    #[must_use]
    pub fn run(&self, scenario: &Scenario, response: &ResponseSpec) -> ScenarioReport {
        // Parsed at most once, and only if a JSON assertion asks for it.
        let document = OnceCell::new();

        let results = scenario
            .assertions
            .iter()
            .map(|assertion| self.evaluate(assertion, response, &document))
            .collect();

        let duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX);
        ScenarioReport::new(&scenario.name, response.status, results, duration_ms)
    }

    fn evaluate(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        document: &OnceCell<Result<JsonDocument, LookupError>>,
    ) -> AssertionResult {
        match assertion {
            Assertion::StatusCode { expected } => {
                self.check_status_code(assertion, response, *expected)
            }
            Assertion::BodyNotEmpty => self.check_body_not_empty(assertion, response),
            Assertion::JsonEquals { path, expected } => {
                let document = document.get_or_init(|| response.json());
                self.check_json_equals(assertion, document, path, expected)
            }
            Assertion::JsonPresent { path } => {
                let document = document.get_or_init(|| response.json());
                self.check_json_present(assertion, document, path)
            }
        }
    }

    fn check_status_code(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
        expected: u16,
    ) -> AssertionResult {
        let actual = response.status;
        if actual == expected {
            AssertionResult::pass_with_value(assertion.clone(), actual.to_string())
        } else {
            AssertionResult::fail_with_value(
                assertion.clone(),
                actual.to_string(),
                "status differs",
            )
        }
    }

    fn check_body_not_empty(
        &self,
        assertion: &Assertion,
        response: &ResponseSpec,
    ) -> AssertionResult {
        if response.is_body_empty() {
            return AssertionResult::fail(assertion.clone(), "body is empty");
        }
        // A JSON body of `{}` or `[]` carries no content either.
        match JsonDocument::parse(&response.body) {
            Ok(document) if document.is_empty() => AssertionResult::fail_with_value(
                assertion.clone(),
                response.body.clone(),
                "document is empty",
            ),
            _ => AssertionResult::pass_with_value(
                assertion.clone(),
                format!("{} bytes", response.size),
            ),
        }
    }

    fn check_json_equals(
        &self,
        assertion: &Assertion,
        document: &Result<JsonDocument, LookupError>,
        path: &str,
        expected: &str,
    ) -> AssertionResult {
        let document = match document {
            Ok(document) => document,
            Err(e) => return AssertionResult::fail(assertion.clone(), e.to_string()),
        };

        match document.text_at(path) {
            Ok(actual) if actual == expected => {
                AssertionResult::pass_with_value(assertion.clone(), actual)
            }
            Ok(actual) => {
                AssertionResult::fail_with_value(assertion.clone(), actual, "value differs")
            }
            Err(e) => AssertionResult::fail(assertion.clone(), e.to_string()),
        }
    }

    fn check_json_present(
        &self,
        assertion: &Assertion,
        document: &Result<JsonDocument, LookupError>,
        path: &str,
    ) -> AssertionResult {
        let document = match document {
            Ok(document) => document,
            Err(e) => return AssertionResult::fail(assertion.clone(), e.to_string()),
        };

        match document.require(path) {
            Ok(value) => AssertionResult::pass_with_value(assertion.clone(), value.to_string()),
            Err(e) => AssertionResult::fail(assertion.clone(), e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use reqres_domain::RequestSpec;

    use super::*;

    fn check(assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        TestRunner::new().evaluate(assertion, response, &OnceCell::new())
    }

    fn response(status: u16, body: &str) -> ResponseSpec {
        ResponseSpec::new(status, BTreeMap::new(), body.as_bytes(), Duration::from_millis(7))
    }

    #[test]
    fn test_status_code() {
        let result = check(&Assertion::status(204), &response(204, ""));
        assert!(result.passed);

        let result = check(&Assertion::status(404), &response(200, "{}"));
        assert!(!result.passed);
        assert_eq!(result.actual.as_deref(), Some("200"));
        assert_eq!(
            result.error.as_deref(),
            Some("expected status code is 404: status differs")
        );
    }

    #[test]
    fn test_body_not_empty() {
        assert!(check(&Assertion::BodyNotEmpty, &response(200, r#"{"page":1}"#)).passed);
        assert!(!check(&Assertion::BodyNotEmpty, &response(200, "")).passed);
        assert!(!check(&Assertion::BodyNotEmpty, &response(200, "{}")).passed);
    }

    #[test]
    fn test_json_equals_accepts_numeric_id() {
        let result = check(
            &Assertion::json_equals("data.id", "2"),
            &response(200, r#"{"data":{"id":2}}"#),
        );
        assert!(result.passed);
        assert_eq!(result.actual.as_deref(), Some("2"));
    }

    #[test]
    fn test_json_equals_failure_does_not_leak_value() {
        let result = check(
            &Assertion::json_equals("job", "leader"),
            &response(201, r#"{"job":"secret-value"}"#),
        );
        assert!(!result.passed);
        let error = result.error.unwrap_or_default();
        assert_eq!(error, "expected JSON job equals \"leader\": value differs");
        assert!(!error.contains("secret-value"));
    }

    #[test]
    fn test_json_present_distinguishes_missing_and_null() {
        let missing = check(&Assertion::json_present("token"), &response(200, "{}"));
        let null = check(
            &Assertion::json_present("token"),
            &response(200, r#"{"token":null}"#),
        );

        assert_eq!(
            missing.error.as_deref(),
            Some("expected JSON token is present and non-null: field 'token' is missing")
        );
        assert_eq!(
            null.error.as_deref(),
            Some("expected JSON token is present and non-null: field 'token' is null")
        );
    }

    #[test]
    fn test_json_assertion_on_non_json_body() {
        let result = check(
            &Assertion::json_present("token"),
            &response(200, "<html>oops</html>"),
        );
        assert!(!result.passed);
        assert!(
            result
                .error
                .unwrap_or_default()
                .contains("response body is not valid JSON")
        );
    }

    #[test]
    fn test_run_collects_every_result() {
        let scenario = Scenario::new("create_user", RequestSpec::post("/users"))
            .expect_status(201)
            .expect_json("name", "morpheus")
            .expect_json("job", "leader");

        let report = TestRunner::new().run(
            &scenario,
            &response(201, r#"{"name":"morpheus","job":"zion resident"}"#),
        );

        assert_eq!(report.scenario, "create_user");
        assert_eq!(report.status, 201);
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.duration_ms, 7);
        assert_eq!(
            report.failure_summary(),
            "expected JSON job equals \"leader\": value differs"
        );
    }
}
