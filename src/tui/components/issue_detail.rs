//! Detail pane for the selected review issue.
//!
//! Renders one issue's full message, its suggestion block when the backend
//! provided one, and its creation timestamp. The pane sits below the issue
//! list on the pull request detail page.

use crate::backend::models::ReviewIssue;

use super::badges::severity_badge;
use super::text::format_timestamp;

/// Placeholder message when no issue is selected.
const NO_SELECTION_PLACEHOLDER: &str = "(No issue selected)";

/// Context for rendering the issue detail view.
#[derive(Debug, Clone)]
pub struct IssueDetailViewContext<'a> {
    /// The selected issue to display, if any.
    pub selected_issue: Option<&'a ReviewIssue>,
    /// Maximum width for the separator line.
    pub max_width: usize,
    /// Maximum height in lines for the detail pane (0 = unlimited).
    pub max_height: usize,
}

/// Component for displaying a single review issue in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueDetailComponent;

impl IssueDetailComponent {
    /// Creates a new issue detail component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the issue detail as a string.
    ///
    /// Returns a separator line, the issue header (severity, kind,
    /// location), the full message, the suggestion block when present, and
    /// the creation timestamp. Output is truncated to `max_height` lines
    /// when specified (> 0).
    #[must_use]
    pub fn view(ctx: &IssueDetailViewContext<'_>) -> String {
        let Some(issue) = ctx.selected_issue else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let mut output = String::new();

        output.push_str(&"\u{2500}".repeat(ctx.max_width));
        output.push('\n');

        output.push_str(&Self::render_header(issue));
        output.push('\n');

        output.push_str(&issue.message);
        output.push('\n');

        if let Some(suggestion) = issue.suggestion.as_deref() {
            output.push_str("Suggestion: ");
            output.push_str(suggestion);
            output.push('\n');
        }

        output.push_str("Reported: ");
        output.push_str(&format_timestamp(&issue.created_at));
        output.push('\n');

        if ctx.max_height > 0 {
            truncate_to_height(&mut output, ctx.max_height);
        }

        output
    }

    /// Renders the issue header with severity badge, kind, and location.
    fn render_header(issue: &ReviewIssue) -> String {
        let badge = severity_badge(&issue.severity);
        let line_suffix = issue.line.map_or_else(String::new, |n| format!(":{n}"));
        format!(
            "{badge} {kind}  {file}{line_suffix}",
            kind = issue.kind,
            file = issue.file_path
        )
    }
}

/// Truncates output to a maximum number of lines, marking the cut.
fn truncate_to_height(output: &mut String, max_height: usize) {
    let line_count = output.lines().count();
    if line_count <= max_height {
        return;
    }

    let keep = max_height.saturating_sub(1);
    let cut_position = output
        .char_indices()
        .filter(|(_, character)| *character == '\n')
        .nth(keep.saturating_sub(1))
        .map(|(position, _)| position + 1);

    if let Some(position) = cut_position {
        output.truncate(position);
        output.push_str("...\n");
    }
}
