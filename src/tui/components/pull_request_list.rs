//! Pull request list component for the repository detail page.

use crate::backend::models::PullRequest;

use super::badges::state_badge;
use super::text::{format_timestamp, short_sha, truncate_line};

/// Maximum display width of a pull request title within a row.
const TITLE_WIDTH: usize = 50;

/// Context for rendering the pull request list view.
#[derive(Debug, Clone)]
pub struct PullRequestListViewContext<'a> {
    /// Pull requests to display.
    pub pull_requests: &'a [PullRequest],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
}

/// Component for displaying a repository's pull requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullRequestListComponent;

impl PullRequestListComponent {
    /// Creates a new pull request list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the pull request list as a string.
    #[must_use]
    pub fn view(ctx: &PullRequestListViewContext<'_>) -> String {
        let mut output = String::new();

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + ctx.visible_height.max(1)).min(ctx.pull_requests.len());

        for (index, pull_request) in ctx
            .pull_requests
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&Self::format_pull_request_line(pull_request, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single pull request row for display.
    fn format_pull_request_line(pull_request: &PullRequest, prefix: &str) -> String {
        let badge = state_badge(pull_request.state.as_deref());
        let title = pull_request
            .title
            .as_deref()
            .map_or_else(|| "(no title)".to_owned(), |t| truncate_line(t, TITLE_WIDTH));
        let sha = pull_request
            .head_sha
            .as_deref()
            .map_or_else(String::new, |sha| format!("  {}", short_sha(sha)));
        let reviewed = pull_request.last_reviewed_at.as_deref().map_or_else(
            String::new,
            |timestamp| format!("  reviewed {}", format_timestamp(timestamp)),
        );

        let mut line = format!("{prefix} #{number}", number = pull_request.pr_number);
        if !badge.is_empty() {
            line.push(' ');
            line.push_str(&badge);
        }
        line.push_str("  ");
        line.push_str(&title);
        line.push_str(&sha);
        line.push_str(&reviewed);
        line
    }
}
