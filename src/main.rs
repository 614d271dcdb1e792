//! Prauditor CLI entrypoint for the review dashboard.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use prauditor::{DashboardError, PrauditorConfig, cli};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;
    cli::dashboard::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<PrauditorConfig, DashboardError> {
    PrauditorConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}
