//! Actions for the user-panel state machine.

use repo_explorer_github::Repository;

/// Actions processed by the panels reducer.
#[derive(Debug, Clone)]
pub enum PanelsAction {
    /// A click on a user row: expands a collapsed panel, collapses an
    /// open one. Expanding a second login implicitly collapses the first.
    ToggleUser {
        /// Clicked account
        login: String,
    },

    /// Repositories resolved for a first-time expansion. The loader never
    /// fails; fetch failures arrive here as an empty list.
    ReposResolved {
        /// Account the fetch was issued for
        login: String,
        /// Token issued when the panel entered `Loading`; mismatches are
        /// discarded as stale
        generation: u64,
        /// Fetched repositories (empty on failure)
        repos: Vec<Repository>,
    },

    /// The reveal delay elapsed for a cached expansion.
    RevealElapsed {
        /// Account whose panel was revealing
        login: String,
        /// Token issued when the panel entered `Revealing`; mismatches are
        /// discarded as stale
        generation: u64,
    },
}
