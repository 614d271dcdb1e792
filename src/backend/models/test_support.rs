//! Sample model builders shared by unit and integration tests.

use super::{PullRequest, Repository, ReviewIssue};

/// Builds a repository with the given identifier and full name.
#[must_use]
pub fn repository(id: u64, full_name: &str) -> Repository {
    Repository {
        id,
        full_name: full_name.to_owned(),
    }
}

/// Builds an open pull request with the given identifier and number.
#[must_use]
pub fn pull_request(id: u64, pr_number: u64, title: &str) -> PullRequest {
    PullRequest {
        id,
        pr_number,
        title: Some(title.to_owned()),
        state: Some("open".to_owned()),
        head_sha: Some("abc1234def5678".to_owned()),
        last_reviewed_at: None,
    }
}

/// Builds a review issue with the given identifier, kind, and severity.
#[must_use]
pub fn review_issue(id: u64, kind: &str, severity: &str) -> ReviewIssue {
    ReviewIssue {
        id,
        file_path: "src/main.rs".to_owned(),
        line: Some(10),
        kind: kind.to_owned(),
        severity: severity.to_owned(),
        message: "Example finding".to_owned(),
        suggestion: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}
