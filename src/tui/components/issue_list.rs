//! Review issue list component for the pull request detail page.

use crate::backend::models::ReviewIssue;

use super::badges::severity_badge;
use super::text::truncate_line;

/// Maximum display width of an issue message preview within a row.
const MESSAGE_WIDTH: usize = 50;

/// Context for rendering the issue list view.
#[derive(Debug, Clone)]
pub struct IssueListViewContext<'a> {
    /// Issues to display.
    pub issues: &'a [ReviewIssue],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
}

/// Component for displaying a pull request's review issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueListComponent;

impl IssueListComponent {
    /// Creates a new issue list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the issue list as a string.
    #[must_use]
    pub fn view(ctx: &IssueListViewContext<'_>) -> String {
        let mut output = String::new();

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + ctx.visible_height.max(1)).min(ctx.issues.len());

        for (index, issue) in ctx
            .issues
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&Self::format_issue_line(issue, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single issue row for display.
    fn format_issue_line(issue: &ReviewIssue, prefix: &str) -> String {
        let badge = severity_badge(&issue.severity);
        let line_suffix = issue.line.map_or_else(String::new, |n| format!(":{n}"));
        let preview = truncate_line(&issue.message, MESSAGE_WIDTH);

        format!(
            "{prefix} {badge} {kind}  {file}{line_suffix}: {preview}",
            kind = issue.kind,
            file = issue.file_path
        )
    }
}
