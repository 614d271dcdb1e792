//! HTTP implementation of the backend gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use url::Url;

use crate::backend::error::DashboardError;
use crate::backend::models::{
    ApiPullRequest, ApiRepository, ApiReviewIssue, ApiTriggerOutcome, PullRequest, Repository,
    ReviewIssue, TriggerOutcome,
};

use super::{BackendGateway, BackendStatus};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Gateway performing real HTTP requests against the review backend.
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: Client,
    base_url: String,
}

impl HttpBackendGateway {
    /// Creates a gateway for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &Url) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|error| DashboardError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Creates a gateway from a raw base URL string.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidUrl`] when the string is not a
    /// valid URL, or [`DashboardError::Configuration`] when the HTTP
    /// client cannot be constructed.
    pub fn from_base_url(raw: &str) -> Result<Self, DashboardError> {
        let base_url = Url::parse(raw).map_err(|error| DashboardError::InvalidUrl(error.to_string()))?;
        Self::new(&base_url)
    }

    /// Performs a JSON GET against a backend-relative path.
    ///
    /// Requests carry `Cache-Control: no-cache` so intermediaries do not
    /// serve stale dashboard data.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = format!("{base}{path}", base = self.base_url);
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|error| DashboardError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Status").to_owned(),
            });
        }

        response.json::<T>().await.map_err(|error| DashboardError::Decode {
            message: error.to_string(),
        })
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn health(&self) -> BackendStatus {
        let url = format!("{base}/", base = self.base_url);
        match self.client.get(&url).header(CACHE_CONTROL, "no-cache").send().await {
            Ok(response) if response.status().is_success() => BackendStatus::Online,
            Ok(_) | Err(_) => BackendStatus::Offline,
        }
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>, DashboardError> {
        let repositories: Vec<ApiRepository> = self.get_json("/api/repos").await?;
        Ok(repositories.into_iter().map(Into::into).collect())
    }

    async fn list_pull_requests(&self, repo_id: u64) -> Result<Vec<PullRequest>, DashboardError> {
        let pull_requests: Vec<ApiPullRequest> =
            self.get_json(&format!("/api/repos/{repo_id}/prs")).await?;
        Ok(pull_requests.into_iter().map(Into::into).collect())
    }

    async fn list_issues(&self, pr_id: u64) -> Result<Vec<ReviewIssue>, DashboardError> {
        let issues: Vec<ApiReviewIssue> = self.get_json(&format!("/api/prs/{pr_id}/issues")).await?;
        Ok(issues.into_iter().map(Into::into).collect())
    }

    async fn trigger_review(&self, pr_id: u64) -> Result<TriggerOutcome, DashboardError> {
        let url = format!("{base}/api/prs/{pr_id}/trigger-review", base = self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|error| DashboardError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_detail(&body)
                .unwrap_or_else(|| format!("HTTP {status}", status = status.as_u16()));
            return Err(DashboardError::Review { message });
        }

        let outcome: ApiTriggerOutcome =
            response.json().await.map_err(|error| DashboardError::Decode {
                message: error.to_string(),
            })?;
        Ok(outcome.into())
    }
}

/// Extracts the `detail` field from a backend error body, when present.
fn extract_error_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
