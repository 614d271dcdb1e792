//! Repository list component for the repository overview page.

use crate::backend::models::Repository;

/// Context for rendering the repository list view.
#[derive(Debug, Clone)]
pub struct RepositoryListViewContext<'a> {
    /// Repositories to display.
    pub repositories: &'a [Repository],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows.
    pub visible_height: usize,
}

/// Component for displaying the repository listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryListComponent;

impl RepositoryListComponent {
    /// Creates a new repository list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the repository list as a string.
    ///
    /// Only rows within the visible window are rendered. The empty-state
    /// message is the caller's responsibility so it can distinguish "no
    /// data" from "fetch failed".
    #[must_use]
    pub fn view(ctx: &RepositoryListViewContext<'_>) -> String {
        let mut output = String::new();

        let start = ctx.scroll_offset;
        let end = (ctx.scroll_offset + ctx.visible_height.max(1)).min(ctx.repositories.len());

        for (index, repository) in ctx
            .repositories
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&Self::format_repository_line(repository, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single repository row for display.
    fn format_repository_line(repository: &Repository, prefix: &str) -> String {
        format!(
            "{prefix} #{id}  {name}",
            id = repository.id,
            name = repository.full_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{RepositoryListComponent, RepositoryListViewContext};
    use crate::backend::models::test_support::repository;

    #[test]
    fn view_shows_cursor_indicator() {
        let repositories = vec![
            repository(1, "octocat/hello-world"),
            repository(2, "octocat/spoon-knife"),
        ];
        let ctx = RepositoryListViewContext {
            repositories: &repositories,
            cursor_position: 1,
            scroll_offset: 0,
            visible_height: 10,
        };

        let output = RepositoryListComponent::view(&ctx);

        assert!(output.contains("  #1  octocat/hello-world"));
        assert!(output.contains("> #2  octocat/spoon-knife"));
    }

    #[test]
    fn view_renders_nothing_for_empty_input() {
        let ctx = RepositoryListViewContext {
            repositories: &[],
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
        };
        assert!(RepositoryListComponent::view(&ctx).is_empty());
    }

    #[test]
    fn view_limits_output_to_visible_window() {
        let repositories: Vec<_> = (1..=20)
            .map(|id| repository(id, &format!("owner/repo-{id}")))
            .collect();
        let ctx = RepositoryListViewContext {
            repositories: &repositories,
            cursor_position: 5,
            scroll_offset: 5,
            visible_height: 3,
        };

        let output = RepositoryListComponent::view(&ctx);

        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("owner/repo-6"));
        assert!(!output.contains("owner/repo-9"));
    }
}
