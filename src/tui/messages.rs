//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events. Completion messages carry the id of
//! the entity they were fetched for so results arriving after the user
//! navigated away can be discarded.

use crate::backend::error::DashboardError;
use crate::backend::gateway::BackendStatus;
use crate::backend::models::{PullRequest, Repository, ReviewIssue};

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    CursorHome,
    /// Move cursor to the last row.
    CursorEnd,

    // Routing
    /// Open the entity under the cursor.
    OpenSelected,
    /// Return to the parent route.
    GoBack,
    /// Jump to the Home page.
    GoHome,

    // Data loading
    /// Re-fetch the current route's data.
    RefreshRequested,
    /// The backend liveness probe completed.
    StatusProbed(BackendStatus),
    /// The repository listing loaded.
    RepositoriesLoaded(Vec<Repository>),
    /// A repository's pull requests loaded.
    PullRequestsLoaded {
        /// Repository the pull requests belong to.
        repo_id: u64,
        /// Display name resolved from the repository listing, when found.
        repository_name: Option<String>,
        /// Pull requests scoped to the repository.
        pull_requests: Vec<PullRequest>,
    },
    /// A pull request's review issues loaded.
    IssuesLoaded {
        /// Pull request the issues belong to.
        pr_id: u64,
        /// The issues reported against the pull request.
        issues: Vec<ReviewIssue>,
    },
    /// The best-effort owner lookup for a pull request resolved.
    ///
    /// This message is only ever produced on success; a failed lookup
    /// produces no message at all.
    ContextResolved {
        /// Pull request the context belongs to.
        pr_id: u64,
        /// Full name of the owning repository.
        repository_name: String,
        /// Metadata of the pull request itself.
        pull_request: PullRequest,
    },
    /// A primary fetch failed.
    LoadFailed(String),

    // Trigger review
    /// Ask the backend to re-run analysis on the current pull request.
    TriggerReviewRequested,
    /// The trigger-review request completed successfully.
    TriggerReviewSucceeded {
        /// Pull request the review ran against.
        pr_id: u64,
        /// Number of issues the re-analysis discovered.
        issues: u64,
    },
    /// The trigger-review request failed.
    TriggerReviewFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a failure message from a [`DashboardError`].
    #[must_use]
    pub fn from_error(error: &DashboardError) -> Self {
        Self::LoadFailed(error.to_string())
    }

    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::CursorHome
                | Self::CursorEnd
        )
    }

    /// Returns true for route change messages.
    #[must_use]
    pub const fn is_routing(&self) -> bool {
        matches!(self, Self::OpenSelected | Self::GoBack | Self::GoHome)
    }

    /// Returns true for data loading and completion messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::StatusProbed(_)
                | Self::RepositoriesLoaded(_)
                | Self::PullRequestsLoaded { .. }
                | Self::IssuesLoaded { .. }
                | Self::ContextResolved { .. }
                | Self::LoadFailed(_)
        )
    }

    /// Returns true for trigger-review messages.
    #[must_use]
    pub const fn is_trigger(&self) -> bool {
        matches!(
            self,
            Self::TriggerReviewRequested
                | Self::TriggerReviewSucceeded { .. }
                | Self::TriggerReviewFailed(_)
        )
    }
}
