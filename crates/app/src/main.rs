//! reqres probe - runs the scenario catalog and reports the results.

use std::process::ExitCode;

use anyhow::Context;
use reqres_application::catalog;
use reqres_probe::{ProbeConfig, logging, run_all};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init().context("failed to initialize logging")?;

    let config = ProbeConfig::load().context("failed to load configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "Starting reqres-probe v{}",
        env!("CARGO_PKG_VERSION")
    );

    let outcomes = run_all(&config, &catalog::scenarios()).await;

    let mut failed = 0usize;
    for outcome in &outcomes {
        match outcome.failure() {
            None => println!("PASS  {}", outcome.name),
            Some(reason) => {
                failed += 1;
                println!("FAIL  {}: {reason}", outcome.name);
            }
        }
    }
    println!(
        "\n{} scenarios: {} passed, {failed} failed",
        outcomes.len(),
        outcomes.len() - failed
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
