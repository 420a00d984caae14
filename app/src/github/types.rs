//! Core types for the central github slice.

use repo_explorer_github::{Repository, User};

/// Fixed banner text for a failed user search.
pub const FETCH_USERS_ERROR: &str = "Failed to fetch users.";

/// Fixed banner text for a failed repository fetch.
pub const FETCH_REPOS_ERROR: &str = "Failed to fetch repositories.";

/// State for the central github slice.
///
/// Holds everything the page derives its banners and user list from. Both
/// async operations write here; neither owns a private copy.
#[derive(Debug, Clone, Default)]
pub struct GithubState {
    /// Accounts from the most recent successful search. Replaced wholesale
    /// on every success, never merged.
    pub users: Vec<User>,

    /// Repositories from the most recent successful fetch. Replaced
    /// wholesale; search operations never touch this field.
    pub repos: Vec<Repository>,

    /// True strictly between an operation's dispatch and its terminal
    /// action. One coarse flag covers both operation kinds, so this only
    /// means "at least one operation in flight".
    pub loading: bool,

    /// Banner text set by the most recent failure. A later success does
    /// not clear it, so a stale banner can sit alongside fresh data.
    pub error: Option<String>,
}

impl GithubState {
    /// Creates a new empty slice state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            repos: Vec::new(),
            loading: false,
            error: None,
        }
    }
}
