//! Dashboard routes and their hierarchy.

/// One page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the backend status probe.
    Home,
    /// Listing of every tracked repository.
    Repositories,
    /// One repository's pull requests.
    RepositoryDetail {
        /// Identifier of the repository being shown.
        repo_id: u64,
    },
    /// One pull request's review issues and summary.
    PullRequestDetail {
        /// Identifier of the pull request being shown.
        pr_id: u64,
    },
}

impl Route {
    /// Returns the display label for the route.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Repositories => "Repositories",
            Self::RepositoryDetail { .. } => "Pull Requests",
            Self::PullRequestDetail { .. } => "PR Review",
        }
    }

    /// Returns the route the back action navigates to.
    ///
    /// Pull request detail returns to the repository listing rather than
    /// its owning repository: the owner is only known through the
    /// best-effort lookup, which may not have resolved.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Repositories => Some(Self::Home),
            Self::RepositoryDetail { .. } | Self::PullRequestDetail { .. } => {
                Some(Self::Repositories)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parent_chain_terminates_at_home() {
        let mut route = Route::PullRequestDetail { pr_id: 42 };
        let mut hops = 0;
        while let Some(parent) = route.parent() {
            route = parent;
            hops += 1;
        }
        assert_eq!(route, Route::Home);
        assert_eq!(hops, 2);
    }
}
