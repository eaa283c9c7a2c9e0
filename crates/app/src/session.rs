//! Per-scenario probe sessions.
//!
//! A session owns one HTTP client bound to the base URL. It is opened when a
//! scenario starts and released when dropped, including when the scenario
//! panics on a failed assertion. Sessions share nothing with each other.

use std::sync::Arc;

use reqres_application::{ApplicationResult, ExecuteRequest, HttpClientError};
use reqres_domain::{RequestSpec, ResponseSpec, Scenario, ScenarioReport};
use reqres_infrastructure::{ReqwestHttpClient, TestRunner};
use url::Url;

use crate::config::ProbeConfig;

/// A scoped HTTP client for one scenario.
pub struct ProbeSession {
    executor: ExecuteRequest<ReqwestHttpClient>,
    runner: TestRunner,
    base_url: Url,
}

impl ProbeSession {
    /// Opens a session against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn open(config: &ProbeConfig) -> Result<Self, HttpClientError> {
        let client = ReqwestHttpClient::new(&config.client_settings())?;
        tracing::debug!(base_url = %config.base_url, "session opened");

        Ok(Self {
            executor: ExecuteRequest::new(Arc::new(client)),
            runner: TestRunner::new(),
            base_url: config.base_url.clone(),
        })
    }

    /// Sends one request and waits for the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is malformed or the transport fails.
    pub async fn send(&self, request: &RequestSpec) -> ApplicationResult<ResponseSpec> {
        self.executor.execute(request).await
    }

    /// Sends a scenario's request and evaluates its assertions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is malformed or the transport fails.
    /// Failed assertions are reported in the returned report, not as errors.
    pub async fn run(&self, scenario: &Scenario) -> ApplicationResult<ScenarioReport> {
        let response = self.send(&scenario.request).await?;
        let report = self.runner.run(scenario, &response);

        for result in report.results.iter().filter(|r| !r.passed) {
            tracing::debug!(
                scenario = %scenario.name,
                actual = result.actual.as_deref().unwrap_or("-"),
                error = result.error.as_deref().unwrap_or("-"),
                "assertion failed"
            );
        }
        Ok(report)
    }
}

impl Drop for ProbeSession {
    fn drop(&mut self) {
        tracing::debug!(base_url = %self.base_url, "session released");
    }
}
