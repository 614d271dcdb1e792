//! Rendering logic for the dashboard TUI.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use super::{DETAIL_HEIGHT, DashboardApp, Route};
use crate::tui::components::{
    IssueDetailComponent, IssueDetailViewContext, IssueListComponent, IssueListViewContext,
    PullRequestListComponent, PullRequestListViewContext, RepositoryListComponent,
    RepositoryListViewContext, SummaryPanel,
};

impl DashboardApp {
    /// Renders the complete frame for the current route.
    pub(super) fn render(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_heading());
        if let Some(banner) = self.render_error_banner() {
            output.push_str(&banner);
        }
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_status_bar());

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "PRAuditor";
        let indicator = if self.trigger_in_flight {
            " [Triggering...]"
        } else if self.loading {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title} - {label}{indicator}\n", label = self.route.label())
    }

    /// Renders the route-specific heading lines.
    fn render_heading(&self) -> String {
        match self.route {
            Route::Home => String::new(),
            Route::Repositories => "Select a repository to view its pull requests\n".to_owned(),
            Route::RepositoryDetail { repo_id } => {
                let name = self.repository_name.clone().unwrap_or_else(|| {
                    format!("Repository #{repo_id}")
                });
                format!("{name}\n")
            }
            Route::PullRequestDetail { pr_id } => {
                let mut heading = self.pr_context.as_ref().map_or_else(
                    || format!("PR Review #{pr_id}\n"),
                    |context| {
                        let mut line = format!(
                            "PR Review #{number}  {repository}",
                            number = context.pull_request.pr_number,
                            repository = context.repository_name
                        );
                        if let Some(title) = context.pull_request.title.as_deref() {
                            line.push_str("  ");
                            line.push_str(title);
                        }
                        line.push('\n');
                        line
                    },
                );
                heading.push_str("r:refresh  t:trigger review\n");
                heading
            }
        }
    }

    /// Renders the inline error banner when a primary fetch failed.
    fn render_error_banner(&self) -> Option<String> {
        self.error
            .as_deref()
            .map(|message| format!("Error: {message}\n"))
    }

    /// Renders the body of the current route.
    fn render_body(&self) -> String {
        match self.route {
            Route::Home => self.render_home(),
            Route::Repositories => self.render_repositories(),
            Route::RepositoryDetail { .. } => self.render_repository_detail(),
            Route::PullRequestDetail { .. } => self.render_pull_request_detail(),
        }
    }

    /// Renders the Home page body.
    fn render_home(&self) -> String {
        let status = self
            .backend_status
            .map_or("checking...", |status| status.label());

        let mut output = String::new();
        output.push_str("Welcome to PRAuditor\n");
        output.push_str("Automated pull request review dashboard\n\n");
        output.push_str(&format!("Backend status: {status}\n\n"));
        output.push_str("Enter: view repositories\n");
        output
    }

    /// Renders the repository listing body.
    fn render_repositories(&self) -> String {
        if self.repositories.is_empty() {
            return self.render_empty_state("No repositories found");
        }

        let ctx = RepositoryListViewContext {
            repositories: &self.repositories,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.list_height(),
        };
        RepositoryListComponent::view(&ctx)
    }

    /// Renders the repository detail body.
    fn render_repository_detail(&self) -> String {
        if self.pull_requests.is_empty() {
            return self.render_empty_state("No pull requests found");
        }

        let ctx = PullRequestListViewContext {
            pull_requests: &self.pull_requests,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.list_height(),
        };
        PullRequestListComponent::view(&ctx)
    }

    /// Renders the pull request detail body: summary, issues, detail pane.
    fn render_pull_request_detail(&self) -> String {
        let mut output = SummaryPanel::view(&self.tally);
        output.push('\n');

        if self.issues.is_empty() {
            output.push_str(&self.render_empty_state("No issues found"));
            return output;
        }

        let list_ctx = IssueListViewContext {
            issues: &self.issues,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.list_height(),
        };
        output.push_str(&IssueListComponent::view(&list_ctx));

        let detail_ctx = IssueDetailViewContext {
            selected_issue: self.issues.get(self.cursor.position),
            max_width: 80.min(self.terminal_width()),
            max_height: DETAIL_HEIGHT,
        };
        output.push_str(&IssueDetailComponent::view(&detail_ctx));

        output
    }

    /// Renders the empty-state message, suppressed while an error banner or
    /// an outstanding fetch explains the missing rows.
    fn render_empty_state(&self, message: &str) -> String {
        if self.error.is_some() || self.loading {
            return String::new();
        }
        format!("  {message}\n")
    }

    /// Renders the status bar with the latest notice or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(notice) = &self.notice {
            return format!("{notice}\n");
        }

        let hints = match self.route {
            Route::Home => "Enter:repositories  r:refresh  ?:help  q:quit",
            Route::Repositories => "j/k:move  Enter:open  Esc:back  r:refresh  ?:help  q:quit",
            Route::RepositoryDetail { .. } => {
                "j/k:move  Enter:open review  Esc:back  r:refresh  ?:help  q:quit"
            }
            Route::PullRequestDetail { .. } => {
                "j/k:move  t:trigger review  Esc:back  r:refresh  ?:help  q:quit"
            }
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first item
  End, G     Go to last item

Routes:
  Enter      Open the selected entry
  Esc        Back to the previous page
  h          Jump to Home

Actions:
  r          Refresh the current page
  t          Trigger a new review (PR page)
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
