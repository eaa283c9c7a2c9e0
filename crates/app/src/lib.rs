//! reqres probe
//!
//! Runs independent HTTP scenarios against the reqres REST API (or any
//! service exposing the same contract) and reports which expectations held.
//! Each scenario follows setup, request, assert, teardown with its own
//! [`ProbeSession`].

pub mod config;
pub mod logging;
pub mod session;

use reqres_application::{ApplicationError, ApplicationResult};
use reqres_domain::{Scenario, ScenarioReport};

pub use config::{ConfigError, ProbeConfig};
pub use session::ProbeSession;

/// Outcome of one scenario: a report, or the error that stopped it.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Report when the request completed.
    pub result: ApplicationResult<ScenarioReport>,
}

impl ScenarioOutcome {
    /// True if the request completed and every assertion held.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(ScenarioReport::all_passed)
    }

    /// Why the scenario failed, if it did.
    #[must_use]
    pub fn failure(&self) -> Option<String> {
        match &self.result {
            Ok(report) if report.all_passed() => None,
            Ok(report) => Some(report.failure_summary()),
            Err(e) => Some(e.to_string()),
        }
    }
}

/// Runs one scenario in a fresh session that is released before returning.
///
/// # Errors
///
/// Returns an error if the session cannot be opened, the request is
/// malformed or the transport fails.
pub async fn run_scenario(
    config: &ProbeConfig,
    scenario: &Scenario,
) -> ApplicationResult<ScenarioReport> {
    let session = ProbeSession::open(config).map_err(ApplicationError::from)?;
    let report = session.run(scenario).await;
    drop(session);

    match &report {
        Ok(r) if r.all_passed() => {
            tracing::info!(
                scenario = %scenario.name,
                duration_ms = r.duration_ms,
                "scenario passed"
            );
        }
        Ok(r) => {
            tracing::warn!(
                scenario = %scenario.name,
                failures = %r.failure_summary(),
                "scenario failed"
            );
        }
        Err(e) => tracing::warn!(scenario = %scenario.name, error = %e, "scenario errored"),
    }
    report
}

/// Runs scenarios one after another. A failure never stops the others.
pub async fn run_all(config: &ProbeConfig, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        outcomes.push(ScenarioOutcome {
            name: scenario.name.clone(),
            result: run_scenario(config, scenario).await,
        });
    }
    outcomes
}
