//! Data models for the entities served by the review backend.
//!
//! The backend owns every entity here; the dashboard never mutates them
//! locally. Types prefixed with `Api` are internal deserialisation targets
//! that convert into public domain types.

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A tracked source-code project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository identifier.
    pub id: u64,
    /// Fully-qualified name (e.g. `owner/project`).
    pub full_name: String,
}

/// A proposed code change within a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request identifier.
    pub id: u64,
    /// Pull request number within its repository.
    pub pr_number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Lifecycle state (e.g. open, closed, merged).
    pub state: Option<String>,
    /// Head commit hash.
    pub head_sha: Option<String>,
    /// Timestamp of the last completed review (ISO 8601 format).
    pub last_reviewed_at: Option<String>,
}

/// A single finding reported against a pull request by the review backend.
///
/// `kind` and `severity` are free-form strings owned by the backend; the
/// dashboard tolerates any value and never enforces a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewIssue {
    /// Issue identifier.
    pub id: u64,
    /// File path the finding refers to.
    pub file_path: String,
    /// Line number within the file, when the finding is line-scoped.
    pub line: Option<u32>,
    /// Finding category (e.g. bug, style).
    pub kind: String,
    /// Finding severity (e.g. critical, major, minor).
    pub severity: String,
    /// Human-readable description of the finding.
    pub message: String,
    /// Suggested remediation, when the backend provides one.
    pub suggestion: Option<String>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: String,
}

/// Result of a trigger-review request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerOutcome {
    /// Number of issues the re-analysis discovered.
    pub issues: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) id: u64,
    pub(super) full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) id: u64,
    pub(super) pr_number: u64,
    pub(super) title: Option<String>,
    pub(super) state: Option<String>,
    pub(super) head_sha: Option<String>,
    pub(super) last_reviewed_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReviewIssue {
    pub(super) id: u64,
    pub(super) file_path: String,
    pub(super) line: Option<u32>,
    pub(super) kind: String,
    pub(super) severity: String,
    pub(super) message: String,
    pub(super) suggestion: Option<String>,
    pub(super) created_at: String,
}

/// Response body of the trigger-review endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(super) struct ApiTriggerOutcome {
    pub(super) issues: u64,
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
        }
    }
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            id: value.id,
            pr_number: value.pr_number,
            title: value.title,
            state: value.state,
            head_sha: value.head_sha,
            last_reviewed_at: value.last_reviewed_at,
        }
    }
}

impl From<ApiReviewIssue> for ReviewIssue {
    fn from(value: ApiReviewIssue) -> Self {
        Self {
            id: value.id,
            file_path: value.file_path,
            line: value.line,
            kind: value.kind,
            severity: value.severity,
            message: value.message,
            suggestion: value.suggestion,
            created_at: value.created_at,
        }
    }
}

impl From<ApiTriggerOutcome> for TriggerOutcome {
    fn from(value: ApiTriggerOutcome) -> Self {
        Self {
            issues: value.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{ApiPullRequest, ApiReviewIssue, ApiTriggerOutcome, PullRequest, ReviewIssue};

    #[test]
    fn api_pull_request_deserialises_from_json() {
        let value = json!({
            "id": 7,
            "pr_number": 123,
            "title": "Add tests",
            "state": "open",
            "head_sha": "abc1234def",
            "last_reviewed_at": "2025-01-02T00:00:00Z"
        });

        let api: ApiPullRequest =
            serde_json::from_value(value).expect("ApiPullRequest should deserialise");
        assert_eq!(api.id, 7);
        assert_eq!(api.pr_number, 123);
        assert_eq!(api.title.as_deref(), Some("Add tests"));
        assert_eq!(api.state.as_deref(), Some("open"));
        assert_eq!(api.head_sha.as_deref(), Some("abc1234def"));
        assert_eq!(api.last_reviewed_at.as_deref(), Some("2025-01-02T00:00:00Z"));
    }

    #[rstest]
    #[case::optional_fields_null(json!({
        "id": 8,
        "pr_number": 9,
        "title": null,
        "state": null,
        "head_sha": null,
        "last_reviewed_at": null
    }))]
    #[case::optional_fields_absent(json!({
        "id": 8,
        "pr_number": 9
    }))]
    fn api_pull_request_tolerates_missing_optional_fields(#[case] value: serde_json::Value) {
        let pull_request: PullRequest = serde_json::from_value::<ApiPullRequest>(value)
            .expect("should deserialise with missing fields")
            .into();

        assert_eq!(pull_request.id, 8);
        assert_eq!(pull_request.pr_number, 9);
        assert!(pull_request.title.is_none());
        assert!(pull_request.state.is_none());
        assert!(pull_request.head_sha.is_none());
        assert!(pull_request.last_reviewed_at.is_none());
    }

    #[test]
    fn api_review_issue_converts_into_review_issue() {
        let value = json!({
            "id": 456,
            "file_path": "src/main.rs",
            "line": 42,
            "kind": "bug",
            "severity": "critical",
            "message": "Possible null dereference",
            "suggestion": "Check the pointer before use",
            "created_at": "2025-01-01T00:00:00Z"
        });

        let issue: ReviewIssue = serde_json::from_value::<ApiReviewIssue>(value)
            .expect("ApiReviewIssue should deserialise")
            .into();

        assert_eq!(issue.id, 456);
        assert_eq!(issue.file_path, "src/main.rs");
        assert_eq!(issue.line, Some(42));
        assert_eq!(issue.kind, "bug");
        assert_eq!(issue.severity, "critical");
        assert_eq!(issue.message, "Possible null dereference");
        assert_eq!(issue.suggestion.as_deref(), Some("Check the pointer before use"));
        assert_eq!(issue.created_at, "2025-01-01T00:00:00Z");
    }

    #[test]
    fn api_review_issue_accepts_unknown_kind_and_severity_strings() {
        let value = json!({
            "id": 1,
            "file_path": "README.md",
            "line": null,
            "kind": "totally-new-category",
            "severity": "catastrophic",
            "message": "Example",
            "suggestion": null,
            "created_at": "2025-01-01T00:00:00Z"
        });

        let issue: ReviewIssue = serde_json::from_value::<ApiReviewIssue>(value)
            .expect("free-form strings should deserialise")
            .into();

        assert_eq!(issue.kind, "totally-new-category");
        assert_eq!(issue.severity, "catastrophic");
        assert!(issue.line.is_none());
    }

    #[test]
    fn api_trigger_outcome_reads_issue_count() {
        let outcome: ApiTriggerOutcome = serde_json::from_value(json!({ "issues": 3 }))
            .expect("ApiTriggerOutcome should deserialise");
        assert_eq!(outcome.issues, 3);
    }
}
