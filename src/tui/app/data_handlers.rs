//! Fetch, completion, and trigger-review handlers for the dashboard.
//!
//! This module contains the message handlers that start async commands and
//! fold their completion messages back into the model. Completion messages
//! carry entity ids so a result arriving after the user navigated away is
//! discarded instead of overwriting the new page.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::{DashboardApp, PullRequestContext, Route};
use crate::backend::gateway::BackendStatus;
use crate::backend::models::{PullRequest, Repository, ReviewIssue};
use crate::summary::IssueTally;
use crate::telemetry::{self, TelemetryEvent};
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches data loading and completion messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::StatusProbed(status) => self.handle_status_probed(*status),
            AppMsg::RepositoriesLoaded(repositories) => {
                self.handle_repositories_loaded(repositories)
            }
            AppMsg::PullRequestsLoaded {
                repo_id,
                repository_name,
                pull_requests,
            } => self.handle_pull_requests_loaded(*repo_id, repository_name.clone(), pull_requests),
            AppMsg::IssuesLoaded { pr_id, issues } => self.handle_issues_loaded(*pr_id, issues),
            AppMsg::ContextResolved {
                pr_id,
                repository_name,
                pull_request,
            } => self.handle_context_resolved(*pr_id, repository_name, pull_request),
            AppMsg::LoadFailed(message) => self.handle_load_failed(message),
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Handles a manual refresh request for the current route.
    ///
    /// Skips the refresh if a fetch is already outstanding to prevent
    /// duplicate requests. Existing rows stay on screen until the fresh
    /// data arrives.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.notice = None;
        Some(self.load_route_cmd())
    }

    /// Applies the liveness probe result on the Home page.
    fn handle_status_probed(&mut self, status: BackendStatus) -> Option<Cmd> {
        if self.route == Route::Home {
            self.backend_status = Some(status);
            self.loading = false;
        }
        None
    }

    /// Applies a completed repository listing fetch.
    fn handle_repositories_loaded(&mut self, repositories: &[Repository]) -> Option<Cmd> {
        if self.route != Route::Repositories {
            return None;
        }

        self.repositories = repositories.to_vec();
        self.loading = false;
        self.error = None;
        self.cursor.clamp(self.repositories.len());
        telemetry::record(TelemetryEvent::RouteRefreshed {
            route: self.route.label().to_owned(),
            entities: self.repositories.len(),
        });
        None
    }

    /// Applies a completed repository detail fetch.
    fn handle_pull_requests_loaded(
        &mut self,
        repo_id: u64,
        repository_name: Option<String>,
        pull_requests: &[PullRequest],
    ) -> Option<Cmd> {
        if self.route != (Route::RepositoryDetail { repo_id }) {
            return None;
        }

        self.repository_name = repository_name;
        self.pull_requests = pull_requests.to_vec();
        self.loading = false;
        self.error = None;
        self.cursor.clamp(self.pull_requests.len());
        telemetry::record(TelemetryEvent::RouteRefreshed {
            route: self.route.label().to_owned(),
            entities: self.pull_requests.len(),
        });
        None
    }

    /// Applies a completed issue fetch and starts the best-effort owner
    /// lookup.
    ///
    /// The owner lookup only runs once the primary data has resolved; its
    /// failure produces no message at all, so the issues below keep
    /// rendering without repository context.
    fn handle_issues_loaded(&mut self, pr_id: u64, issues: &[ReviewIssue]) -> Option<Cmd> {
        if self.route != (Route::PullRequestDetail { pr_id }) {
            return None;
        }

        self.issues = issues.to_vec();
        self.tally = IssueTally::from_issues(&self.issues);
        self.loading = false;
        self.error = None;
        self.cursor.clamp(self.issues.len());
        telemetry::record(TelemetryEvent::RouteRefreshed {
            route: self.route.label().to_owned(),
            entities: self.issues.len(),
        });
        Some(Self::resolve_context_cmd(pr_id))
    }

    /// Applies a resolved owner lookup on the pull request detail page.
    fn handle_context_resolved(
        &mut self,
        pr_id: u64,
        repository_name: &str,
        pull_request: &PullRequest,
    ) -> Option<Cmd> {
        if self.route == (Route::PullRequestDetail { pr_id }) {
            self.pr_context = Some(PullRequestContext {
                repository_name: repository_name.to_owned(),
                pull_request: pull_request.clone(),
            });
        }
        None
    }

    /// Applies a failed primary fetch.
    ///
    /// The page shell keeps rendering with an inline banner and an empty
    /// result set.
    fn handle_load_failed(&mut self, message: &str) -> Option<Cmd> {
        self.loading = false;
        self.error = Some(message.to_owned());
        self.clear_failed_route_data();
        None
    }

    /// Empties the current route's result set after a failed fetch.
    fn clear_failed_route_data(&mut self) {
        match self.route {
            Route::Home => {}
            Route::Repositories => self.repositories.clear(),
            Route::RepositoryDetail { .. } => self.pull_requests.clear(),
            Route::PullRequestDetail { .. } => {
                self.issues.clear();
                self.tally = IssueTally::default();
            }
        }
        self.cursor.clamp(0);
    }

    /// Dispatches trigger-review messages to their handlers.
    pub(super) fn handle_trigger_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::TriggerReviewRequested => self.handle_trigger_requested(),
            AppMsg::TriggerReviewSucceeded { pr_id, issues } => {
                self.handle_trigger_succeeded(*pr_id, *issues)
            }
            AppMsg::TriggerReviewFailed(message) => self.handle_trigger_failed(message),
            _ => {
                // Unreachable: caller filters to trigger messages.
                None
            }
        }
    }

    /// Starts a trigger-review request for the open pull request.
    ///
    /// Re-entry is short-circuited while a request is outstanding; the key
    /// does nothing on other routes.
    fn handle_trigger_requested(&mut self) -> Option<Cmd> {
        let Route::PullRequestDetail { pr_id } = self.route else {
            return None;
        };
        if self.trigger_in_flight {
            return None;
        }

        self.trigger_in_flight = true;
        self.notice = None;
        Some(Self::trigger_review_cmd(pr_id))
    }

    /// Applies a successful trigger-review response and re-fetches the
    /// current route.
    fn handle_trigger_succeeded(&mut self, pr_id: u64, issues: u64) -> Option<Cmd> {
        self.trigger_in_flight = false;
        self.notice = Some(format!(
            "Review triggered: found {issues} issue(s). Reloading..."
        ));
        telemetry::record(TelemetryEvent::ReviewTriggered {
            pull_request_id: pr_id,
            issues,
        });

        self.loading = true;
        Some(self.load_route_cmd())
    }

    /// Surfaces a failed trigger-review request without altering page
    /// state.
    fn handle_trigger_failed(&mut self, message: &str) -> Option<Cmd> {
        self.trigger_in_flight = false;
        self.notice = Some(format!("Failed to trigger review: {message}"));
        None
    }

    /// Creates the fetch command for the current route.
    pub(super) fn load_route_cmd(&self) -> Cmd {
        match self.route {
            Route::Home => Box::pin(async {
                let status = crate::tui::probe_backend().await;
                Some(Box::new(AppMsg::StatusProbed(status)) as Box<dyn Any + Send>)
            }),
            Route::Repositories => Box::pin(async {
                let msg = match crate::tui::fetch_repositories().await {
                    Ok(repositories) => AppMsg::RepositoriesLoaded(repositories),
                    Err(error) => AppMsg::from_error(&error),
                };
                Some(Box::new(msg) as Box<dyn Any + Send>)
            }),
            Route::RepositoryDetail { repo_id } => Box::pin(async move {
                let msg = match crate::tui::fetch_repository_detail(repo_id).await {
                    Ok((repository_name, pull_requests)) => AppMsg::PullRequestsLoaded {
                        repo_id,
                        repository_name,
                        pull_requests,
                    },
                    Err(error) => AppMsg::from_error(&error),
                };
                Some(Box::new(msg) as Box<dyn Any + Send>)
            }),
            Route::PullRequestDetail { pr_id } => Box::pin(async move {
                let msg = match crate::tui::fetch_issues(pr_id).await {
                    Ok(issues) => AppMsg::IssuesLoaded { pr_id, issues },
                    Err(error) => AppMsg::from_error(&error),
                };
                Some(Box::new(msg) as Box<dyn Any + Send>)
            }),
        }
    }

    /// Creates the best-effort owner lookup command.
    ///
    /// A failed lookup resolves to no message at all rather than an error,
    /// keeping the failure invisible to the page.
    fn resolve_context_cmd(pr_id: u64) -> Cmd {
        Box::pin(async move {
            let (repository_name, pull_request) =
                crate::tui::resolve_pull_request_context(pr_id).await?;
            Some(Box::new(AppMsg::ContextResolved {
                pr_id,
                repository_name,
                pull_request,
            }) as Box<dyn Any + Send>)
        })
    }

    /// Creates the trigger-review command.
    fn trigger_review_cmd(pr_id: u64) -> Cmd {
        Box::pin(async move {
            let msg = match crate::tui::trigger_review(pr_id).await {
                Ok(outcome) => AppMsg::TriggerReviewSucceeded {
                    pr_id,
                    issues: outcome.issues,
                },
                Err(error) => AppMsg::TriggerReviewFailed(error.detail()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}
