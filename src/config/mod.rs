//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prauditor.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRAUDITOR_BACKEND_URL`, or legacy
//!    `BACKEND_URL`
//! 4. **Command-line arguments** – `--backend-url`/`-b`, `--repo`/`-R`,
//!    and `--pr`/`-P`
//!
//! # Configuration File
//!
//! Place `.prauditor.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! backend_url = "http://localhost:8000"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::backend::error::DashboardError;

/// Backend base URL used when no other source provides one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Route the dashboard opens on, determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRoute {
    /// Open on the Home page with the backend status probe.
    Home,
    /// Open on one repository's pull request listing.
    Repository(u64),
    /// Open on one pull request's review issues.
    PullRequest(u64),
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRAUDITOR_BACKEND_URL`, `BACKEND_URL` (legacy), or `--backend-url`:
///   backend base URL
/// - `PRAUDITOR_REPO` or `--repo`: repository id to open on
/// - `PRAUDITOR_PR` or `--pr`: pull request id to open on
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use prauditor::PrauditorConfig;
///
/// let config = PrauditorConfig::load().expect("failed to load configuration");
/// let backend_url = config.resolve_backend_url().expect("backend URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRAUDITOR",
    discovery(
        dotfile_name = ".prauditor.toml",
        config_file_name = "prauditor.toml",
        app_name = "prauditor"
    )
)]
pub struct PrauditorConfig {
    /// Base URL of the review backend.
    ///
    /// Can be provided via:
    /// - CLI: `--backend-url <URL>` or `-b <URL>`
    /// - Environment: `PRAUDITOR_BACKEND_URL` or `BACKEND_URL` (legacy)
    /// - Config file: `backend_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub backend_url: Option<String>,

    /// Repository id to open the dashboard on.
    ///
    /// Can be provided via:
    /// - CLI: `--repo <ID>` or `-R <ID>`
    /// - Environment: `PRAUDITOR_REPO`
    /// - Config file: `repo = 1`
    #[ortho_config(cli_short = 'R')]
    pub repo: Option<u64>,

    /// Pull request id to open the dashboard on.
    ///
    /// Can be provided via:
    /// - CLI: `--pr <ID>` or `-P <ID>`
    /// - Environment: `PRAUDITOR_PR`
    /// - Config file: `pr = 1`
    #[ortho_config(cli_short = 'P')]
    pub pr: Option<u64>,
}

impl PrauditorConfig {
    /// Resolves the backend base URL from configuration, the legacy
    /// `BACKEND_URL` environment variable, or the built-in default.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the resolved value is
    /// not a valid URL.
    pub fn resolve_backend_url(&self) -> Result<Url, DashboardError> {
        let raw = self
            .backend_url
            .clone()
            .or_else(|| env::var("BACKEND_URL").ok())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());

        Url::parse(&raw).map_err(|error| DashboardError::InvalidUrl(error.to_string()))
    }

    /// Determines the route the dashboard opens on.
    ///
    /// A pull request id wins over a repository id when both are provided,
    /// mirroring the deepest link; with neither the dashboard opens on
    /// Home.
    #[must_use]
    pub const fn start_route(&self) -> StartRoute {
        if let Some(pr_id) = self.pr {
            StartRoute::PullRequest(pr_id)
        } else if let Some(repo_id) = self.repo {
            StartRoute::Repository(repo_id)
        } else {
            StartRoute::Home
        }
    }
}
