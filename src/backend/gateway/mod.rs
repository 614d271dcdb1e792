//! Gateways for talking to the review backend.
//!
//! The trait-based design enables mocking in tests while the HTTP
//! implementation handles real requests against the configured base URL.

mod http;

pub use http::HttpBackendGateway;

use async_trait::async_trait;

use crate::backend::error::DashboardError;
use crate::backend::models::{PullRequest, Repository, ReviewIssue, TriggerOutcome};

/// Advisory liveness of the review backend.
///
/// The probe result only informs the Home page; it never blocks rendering
/// and failures are folded into [`BackendStatus::Offline`] rather than
/// surfaced as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// The backend answered the liveness probe.
    Online,
    /// The probe failed or returned a non-success status.
    Offline,
}

impl BackendStatus {
    /// Returns the display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

/// Gateway that can load dashboard data from the review backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Probes the backend root for liveness.
    ///
    /// Any transport failure or non-success status yields
    /// [`BackendStatus::Offline`]; this operation never errors.
    async fn health(&self) -> BackendStatus;

    /// Fetches every tracked repository.
    async fn list_repositories(&self) -> Result<Vec<Repository>, DashboardError>;

    /// Fetches the pull requests belonging to one repository.
    async fn list_pull_requests(&self, repo_id: u64) -> Result<Vec<PullRequest>, DashboardError>;

    /// Fetches the review issues reported against one pull request.
    async fn list_issues(&self, pr_id: u64) -> Result<Vec<ReviewIssue>, DashboardError>;

    /// Asks the backend to re-run analysis on one pull request.
    async fn trigger_review(&self, pr_id: u64) -> Result<TriggerOutcome, DashboardError>;
}

#[cfg(test)]
mod tests {
    use super::{BackendGateway, BackendStatus, MockBackendGateway};
    use crate::backend::models::test_support::repository;

    #[test]
    fn backend_status_labels_match_the_page_copy() {
        assert_eq!(BackendStatus::Online.label(), "Online");
        assert_eq!(BackendStatus::Offline.label(), "Offline");
    }

    #[tokio::test]
    async fn gateway_trait_objects_dispatch_dynamically() {
        let mut mock = MockBackendGateway::new();
        mock.expect_list_repositories()
            .returning(|| Ok(vec![repository(1, "octocat/hello-world")]));

        let gateway: Box<dyn BackendGateway> = Box::new(mock);
        let repositories = gateway
            .list_repositories()
            .await
            .expect("mock should answer");

        assert_eq!(repositories.len(), 1);
    }
}
