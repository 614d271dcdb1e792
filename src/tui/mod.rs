//! Terminal user interface for the review dashboard.
//!
//! This module provides the interactive dashboard rendering repositories,
//! pull requests, and review issues fetched from the review backend, using
//! the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and routes
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Bootstrap
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, module-level storage carries the start parameters. Call
//! [`set_backend_context`] and [`set_initial_route`] before starting the
//! program; `DashboardApp::init()` retrieves both.

use std::sync::OnceLock;

use url::Url;

use crate::backend::error::DashboardError;
use crate::backend::gateway::{BackendGateway, BackendStatus, HttpBackendGateway};
use crate::backend::models::{PullRequest, Repository, ReviewIssue, TriggerOutcome};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::{DashboardApp, Route};

/// Global storage for the backend base URL.
///
/// This is set before the TUI program starts and read by every fetch
/// helper in this module.
static BACKEND_CONTEXT: OnceLock<BackendContext> = OnceLock::new();

/// Global storage for the route the dashboard opens on.
static INITIAL_ROUTE: OnceLock<Route> = OnceLock::new();

/// Context required to reach the review backend.
struct BackendContext {
    base_url: Url,
}

/// Sets the backend context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program; without
/// it every fetch fails with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_backend_context(base_url: Url) -> bool {
    BACKEND_CONTEXT.set(BackendContext { base_url }).is_ok()
}

/// Sets the route the dashboard opens on.
///
/// Without this the dashboard opens on Home.
///
/// # Returns
///
/// `true` if the route was set, `false` if it was already set.
pub fn set_initial_route(route: Route) -> bool {
    INITIAL_ROUTE.set(route).is_ok()
}

/// Gets the configured start route from storage.
///
/// Called internally by `DashboardApp::init()`.
pub(crate) fn initial_route() -> Route {
    INITIAL_ROUTE.get().copied().unwrap_or(Route::Home)
}

/// Builds a gateway from the stored backend context.
fn gateway() -> Result<HttpBackendGateway, DashboardError> {
    let context = BACKEND_CONTEXT
        .get()
        .ok_or_else(|| DashboardError::Configuration {
            message: "backend context not configured".to_owned(),
        })?;
    HttpBackendGateway::new(&context.base_url)
}

/// Probes the backend for liveness.
///
/// A missing backend context reports as offline rather than erroring; the
/// probe result is advisory only.
pub(crate) async fn probe_backend() -> BackendStatus {
    match gateway() {
        Ok(gateway) => gateway.health().await,
        Err(error) => {
            tracing::debug!("backend probe skipped: {error}");
            BackendStatus::Offline
        }
    }
}

/// Fetches the repository listing.
pub(crate) async fn fetch_repositories() -> Result<Vec<Repository>, DashboardError> {
    gateway()?.list_repositories().await
}

/// Fetches one repository's display name and pull requests.
///
/// The display name is resolved by scanning the repository listing; an id
/// with no match yields `None` for the name while the pull request fetch
/// still proceeds.
pub(crate) async fn fetch_repository_detail(
    repo_id: u64,
) -> Result<(Option<String>, Vec<PullRequest>), DashboardError> {
    let gateway = gateway()?;

    let repositories = gateway.list_repositories().await?;
    let repository_name = repositories
        .into_iter()
        .find(|repository| repository.id == repo_id)
        .map(|repository| repository.full_name);

    let pull_requests = gateway.list_pull_requests(repo_id).await?;
    Ok((repository_name, pull_requests))
}

/// Fetches one pull request's review issues.
pub(crate) async fn fetch_issues(pr_id: u64) -> Result<Vec<ReviewIssue>, DashboardError> {
    gateway()?.list_issues(pr_id).await
}

/// Resolves the owning repository and metadata for a pull request.
///
/// Scans every repository's pull request list until a match is found. The
/// lookup is best-effort: any failure is logged at debug level and folded
/// into `None`, never surfaced to the page.
pub(crate) async fn resolve_pull_request_context(
    pr_id: u64,
) -> Option<(String, PullRequest)> {
    let gateway = match gateway() {
        Ok(gateway) => gateway,
        Err(error) => {
            tracing::debug!("pull request context lookup skipped: {error}");
            return None;
        }
    };

    let repositories = match gateway.list_repositories().await {
        Ok(repositories) => repositories,
        Err(error) => {
            tracing::debug!("pull request context lookup failed: {error}");
            return None;
        }
    };

    for repository in repositories {
        let pull_requests = match gateway.list_pull_requests(repository.id).await {
            Ok(pull_requests) => pull_requests,
            Err(error) => {
                tracing::debug!(
                    "pull request context lookup failed for repository {id}: {error}",
                    id = repository.id
                );
                return None;
            }
        };

        if let Some(pull_request) = pull_requests
            .into_iter()
            .find(|pull_request| pull_request.id == pr_id)
        {
            return Some((repository.full_name, pull_request));
        }
    }

    None
}

/// Asks the backend to re-run analysis on one pull request.
pub(crate) async fn trigger_review(pr_id: u64) -> Result<TriggerOutcome, DashboardError> {
    gateway()?.trigger_review(pr_id).await
}
