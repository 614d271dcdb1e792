//! Summary panel showing aggregate issue counts.

use crate::summary::IssueTally;

/// Component rendering the per-kind and per-severity issue counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryPanel;

impl SummaryPanel {
    /// Creates a new summary panel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the summary tables as a string.
    #[must_use]
    pub fn view(tally: &IssueTally) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total issues: {total}\n", total = tally.total()));

        if !tally.by_kind.is_empty() {
            output.push_str("By kind:     ");
            output.push_str(&render_counts(&tally.by_kind));
            output.push('\n');
        }

        if !tally.by_severity.is_empty() {
            output.push_str("By severity: ");
            output.push_str(&render_counts(&tally.by_severity));
            output.push('\n');
        }

        output
    }
}

/// Renders one count table as `key: count` pairs separated by two spaces.
fn render_counts(table: &[(String, usize)]) -> String {
    table
        .iter()
        .map(|(key, count)| format!("{key}: {count}"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::SummaryPanel;
    use crate::backend::models::test_support::review_issue;
    use crate::summary::IssueTally;

    #[test]
    fn view_renders_total_and_both_tables() {
        let issues = vec![
            review_issue(1, "bug", "critical"),
            review_issue(2, "bug", "minor"),
            review_issue(3, "style", "minor"),
        ];
        let output = SummaryPanel::view(&IssueTally::from_issues(&issues));

        assert!(output.contains("Total issues: 3"));
        assert!(output.contains("bug: 2"));
        assert!(output.contains("style: 1"));
        assert!(output.contains("minor: 2"));
    }

    #[test]
    fn view_renders_only_total_for_empty_tally() {
        let output = SummaryPanel::view(&IssueTally::default());

        assert!(output.contains("Total issues: 0"));
        assert!(!output.contains("By kind"));
        assert!(!output.contains("By severity"));
    }
}
