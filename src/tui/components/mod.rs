//! UI components for the dashboard TUI.
//!
//! This module provides the render functions mapping backend entities to
//! terminal output. Each component is a deterministic input-to-output
//! mapping; none performs I/O.

mod badges;
mod issue_detail;
mod issue_list;
mod pull_request_list;
mod repository_list;
mod summary_panel;
mod text;

pub use badges::{PullRequestStateTier, SeverityTier, severity_badge, state_badge};
pub use issue_detail::{IssueDetailComponent, IssueDetailViewContext};
pub use issue_list::{IssueListComponent, IssueListViewContext};
pub use pull_request_list::{PullRequestListComponent, PullRequestListViewContext};
pub use repository_list::{RepositoryListComponent, RepositoryListViewContext};
pub use summary_panel::SummaryPanel;
