//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! the dashboard. Each route is a read-then-render flow: entering a route
//! clears its data, issues the route's fetch command, and the completion
//! message fills the model back in. A failed primary fetch sets the inline
//! error banner; the page shell still renders.
//!
//! # Module Structure
//!
//! - `route`: Route enum and hierarchy
//! - `navigation`: Cursor movement handlers
//! - `data_handlers`: Fetch, trigger-review, and completion handling
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::backend::gateway::BackendStatus;
use crate::backend::models::{PullRequest, Repository, ReviewIssue};
use crate::summary::IssueTally;

use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::ListCursor;

mod data_handlers;
mod navigation;
mod rendering;
mod route;

pub use route::Route;

/// Layout rows reserved for header, heading, separator, and status bar.
pub(crate) const CHROME_HEIGHT: usize = 6;
/// Rows reserved for the summary panel on the pull request detail page.
pub(crate) const SUMMARY_HEIGHT: usize = 3;
/// Rows reserved for the issue detail pane on the pull request detail page.
pub(crate) const DETAIL_HEIGHT: usize = 6;
/// Minimum rows for a list, ensuring at least one row is visible even when
/// the terminal is very small.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Best-effort context for the pull request detail page.
///
/// Produced by scanning every repository's pull requests for the open PR;
/// absent whenever that lookup failed or has not resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestContext {
    /// Full name of the owning repository.
    pub(crate) repository_name: String,
    /// Metadata of the pull request itself.
    pub(crate) pull_request: PullRequest,
}

/// Main application model for the dashboard TUI.
#[derive(Debug)]
pub struct DashboardApp {
    /// Page currently being shown.
    pub(crate) route: Route,
    /// Result of the backend liveness probe (Home page only).
    pub(crate) backend_status: Option<BackendStatus>,
    /// Repository listing rows.
    pub(crate) repositories: Vec<Repository>,
    /// Display name of the repository on the repository detail page.
    pub(crate) repository_name: Option<String>,
    /// Pull request rows on the repository detail page.
    pub(crate) pull_requests: Vec<PullRequest>,
    /// Review issue rows on the pull request detail page.
    pub(crate) issues: Vec<ReviewIssue>,
    /// Aggregated counts over `issues`.
    pub(crate) tally: IssueTally,
    /// Best-effort owner/metadata context for the open pull request.
    pub(crate) pr_context: Option<PullRequestContext>,
    /// Whether the current route's primary fetch is outstanding.
    pub(crate) loading: bool,
    /// Inline error banner for the current route, if any.
    pub(crate) error: Option<String>,
    /// Status-bar notice from the last user-initiated action, if any.
    pub(crate) notice: Option<String>,
    /// Guard against duplicate concurrent trigger-review requests.
    pub(crate) trigger_in_flight: bool,
    /// Cursor within the current route's list.
    pub(crate) cursor: ListCursor,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
}

impl DashboardApp {
    /// Creates a new application opening on the given route.
    #[must_use]
    pub fn new(route: Route) -> Self {
        Self {
            route,
            backend_status: None,
            repositories: Vec::new(),
            repository_name: None,
            pull_requests: Vec::new(),
            issues: Vec::new(),
            tally: IssueTally::default(),
            pr_context: None,
            loading: false,
            error: None,
            notice: None,
            trigger_in_flight: false,
            cursor: ListCursor::new(),
            width: 80,
            height: 24,
            show_help: false,
        }
    }

    /// Creates an application opening on the Home page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Route::Home)
    }

    /// Returns the route currently being shown.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Returns the number of rows in the current route's list.
    pub(crate) fn list_len(&self) -> usize {
        match self.route {
            Route::Home => 0,
            Route::Repositories => self.repositories.len(),
            Route::RepositoryDetail { .. } => self.pull_requests.len(),
            Route::PullRequestDetail { .. } => self.issues.len(),
        }
    }

    /// Returns the number of list rows that fit the current terminal.
    pub(crate) fn list_height(&self) -> usize {
        let reserved = match self.route {
            Route::PullRequestDetail { .. } => CHROME_HEIGHT + SUMMARY_HEIGHT + DETAIL_HEIGHT,
            _ => CHROME_HEIGHT,
        };
        (self.height as usize).saturating_sub(reserved).max(MIN_LIST_HEIGHT)
    }

    /// Switches to a route, clears its stale data, and starts its fetch.
    ///
    /// The previous route's banner and notice never survive navigation;
    /// each page starts from a clean shell.
    pub(crate) fn enter_route(&mut self, route: Route) -> Option<Cmd> {
        self.route = route;
        self.error = None;
        self.notice = None;
        self.loading = true;
        self.cursor.reset();
        self.clear_route_data();
        Some(self.load_route_cmd())
    }

    /// Clears the data shown by the current route.
    fn clear_route_data(&mut self) {
        match self.route {
            Route::Home => self.backend_status = None,
            Route::Repositories => self.repositories.clear(),
            Route::RepositoryDetail { .. } => {
                self.repository_name = None;
                self.pull_requests.clear();
            }
            Route::PullRequestDetail { .. } => {
                self.issues.clear();
                self.tally = IssueTally::default();
                self.pr_context = None;
            }
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It
    /// delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_routing() {
            return self.handle_routing_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_trigger() {
            return self.handle_trigger_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches route change messages to their handlers.
    fn handle_routing_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSelected => self.handle_open_selected(),
            AppMsg::GoBack => self.route.parent().and_then(|parent| self.enter_route(parent)),
            AppMsg::GoHome => {
                if self.route == Route::Home {
                    None
                } else {
                    self.enter_route(Route::Home)
                }
            }
            _ => {
                // Unreachable: caller filters to routing messages.
                None
            }
        }
    }

    /// Opens the entity under the cursor.
    ///
    /// On Home the action opens the repository listing (the page's one
    /// link); on the deepest route there is nothing further to open.
    fn handle_open_selected(&mut self) -> Option<Cmd> {
        match self.route {
            Route::Home => self.enter_route(Route::Repositories),
            Route::Repositories => {
                let target = self
                    .repositories
                    .get(self.cursor.position)
                    .map(|repository| Route::RepositoryDetail {
                        repo_id: repository.id,
                    });
                target.and_then(|route| self.enter_route(route))
            }
            Route::RepositoryDetail { .. } => {
                let target = self
                    .pull_requests
                    .get(self.cursor.position)
                    .map(|pull_request| Route::PullRequestDetail {
                        pr_id: pull_request.id,
                    });
                target.and_then(|route| self.enter_route(route))
            }
            Route::PullRequestDetail { .. } => None,
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Returns the terminal width in columns.
    pub(crate) const fn terminal_width(&self) -> usize {
        self.width as usize
    }
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the start route from module-level storage.
        let route = super::initial_route();
        let mut model = Self::new(route);
        model.loading = true;
        let cmd = model.load_route_cmd();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay without further effect.
            if self.show_help {
                self.show_help = false;
                return None;
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.render()
    }
}
