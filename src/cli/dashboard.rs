//! Dashboard TUI runner.
//!
//! This module provides the entry point that wires configuration into the
//! interactive terminal dashboard.

use std::io::{self, Write};

use bubbletea_rs::Program;

use crate::backend::error::DashboardError;
use crate::config::{PrauditorConfig, StartRoute};
use crate::tui::{DashboardApp, Route, set_backend_context, set_initial_route};

/// Runs the dashboard TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The backend base URL is invalid
/// - The TUI fails to initialise
pub async fn run(config: &PrauditorConfig) -> Result<(), DashboardError> {
    let base_url = config.resolve_backend_url()?;
    let route = match config.start_route() {
        StartRoute::Home => Route::Home,
        StartRoute::Repository(repo_id) => Route::RepositoryDetail { repo_id },
        StartRoute::PullRequest(pr_id) => Route::PullRequestDetail { pr_id },
    };

    // Store the backend context and start route for Model::init() to
    // retrieve. If already set (e.g. re-running the TUI in the same
    // process), this is a no-op and the existing values remain.
    let _ = set_backend_context(base_url);
    let _ = set_initial_route(route);

    run_tui().await.map_err(|error| DashboardError::Io {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // DashboardApp::init() will retrieve data from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_app_can_be_created_empty() {
        let app = DashboardApp::empty();
        assert_eq!(app.route(), Route::Home);
    }
}
