//! Aggregation of review issues into summary counts.
//!
//! The dashboard's only derived data: given the issues of one pull
//! request, tally how many fall into each kind and each severity. Keys are
//! whatever strings the backend sent; order follows first occurrence so
//! the summary panel reads stably across refreshes of the same data.

use crate::backend::models::ReviewIssue;

/// Frequency tables over one pull request's review issues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTally {
    /// Count of issues per kind, ordered by first occurrence.
    pub by_kind: Vec<(String, usize)>,
    /// Count of issues per severity, ordered by first occurrence.
    pub by_severity: Vec<(String, usize)>,
}

impl IssueTally {
    /// Tallies the given issues in a single pass.
    #[must_use]
    pub fn from_issues(issues: &[ReviewIssue]) -> Self {
        let mut tally = Self::default();
        for issue in issues {
            increment(&mut tally.by_kind, &issue.kind);
            increment(&mut tally.by_severity, &issue.severity);
        }
        tally
    }

    /// Returns the total number of issues tallied.
    ///
    /// Both tables partition the same input, so summing either yields the
    /// input length; the kind table is used here.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_kind.iter().map(|(_, count)| count).sum()
    }
}

/// Increments the counter for `key`, appending a new entry on first sight.
///
/// A linear scan keeps first-occurrence order without an index; issue lists
/// are small enough that this never matters.
fn increment(table: &mut Vec<(String, usize)>, key: &str) {
    if let Some((_, count)) = table.iter_mut().find(|(existing, _)| existing == key) {
        *count += 1;
    } else {
        table.push((key.to_owned(), 1));
    }
}
