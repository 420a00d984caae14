//! Actions for the central github slice.

use repo_explorer_github::{Repository, User};

/// Actions processed by the github slice reducer.
///
/// Two async operations, each with a three-phase lifecycle: the command
/// marks the pending phase; the completion events fed back by the spawned
/// effect mark the fulfilled or rejected phase.
#[derive(Debug, Clone)]
pub enum GithubAction {
    // ========== Commands ==========
    /// Command: search accounts matching the query.
    SearchUsers {
        /// Trimmed, non-blank query text
        query: String,
    },

    /// Command: fetch an account's repositories.
    FetchRepos {
        /// Account whose repositories to fetch
        login: String,
    },

    // ========== Completion events ==========
    /// Event: user search succeeded.
    UsersFetched {
        /// Matching accounts; replaces the previous list wholesale
        users: Vec<User>,
    },

    /// Event: user search failed (network, non-2xx, or parse failure).
    UsersFetchFailed,

    /// Event: repository fetch succeeded.
    ReposFetched {
        /// Fetched repositories; replaces the previous list wholesale
        repos: Vec<Repository>,
    },

    /// Event: repository fetch failed (network, non-2xx, or parse failure).
    ReposFetchFailed,
}
