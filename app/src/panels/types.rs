//! Core types for the user-panel state machine.

use repo_explorer_github::Repository;
use std::collections::HashMap;

/// Lifecycle of a single account's panel.
///
/// Exactly one tagged value per login replaces the ad hoc trio of
/// loading/shown/open flags a naive port would keep in parallel maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Hidden. The default for every login.
    #[default]
    Collapsed,

    /// Expanded for the first time; repositories are being fetched.
    Loading {
        /// Token the fetch completion must present to be applied
        generation: u64,
    },

    /// Expanded with cached repositories; the reveal delay is pending.
    Revealing {
        /// Token the delay elapse must present to be applied
        generation: u64,
    },

    /// Expanded with content visible.
    Ready,
}

/// State for the user-panel reducer.
///
/// Tracks the single open panel, the per-login lifecycle, and the
/// per-login repository cache. Cache entries are written once per login
/// and never evicted for the state's lifetime.
#[derive(Debug, Clone, Default)]
pub struct PanelsState {
    /// Login of the single expanded panel, if any
    open: Option<String>,

    /// Lifecycle per login; an absent entry means `Collapsed`
    panels: HashMap<String, Panel>,

    /// Fetched repositories per login (failures degrade to empty lists)
    cache: HashMap<String, Vec<Repository>>,

    /// Source of generation tokens; bumped on every expansion
    generation: u64,
}

impl PanelsState {
    /// Create a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Login of the currently expanded panel, if any.
    #[must_use]
    pub fn open_login(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Lifecycle of the given login's panel.
    #[must_use]
    pub fn panel(&self, login: &str) -> Panel {
        self.panels.get(login).copied().unwrap_or_default()
    }

    /// Cached repositories for the given login, if fetched before.
    #[must_use]
    pub fn cached(&self, login: &str) -> Option<&[Repository]> {
        self.cache.get(login).map(Vec::as_slice)
    }

    /// Whether the given login's repositories were fetched before.
    #[must_use]
    pub fn is_cached(&self, login: &str) -> bool {
        self.cache.contains_key(login)
    }

    /// Point the single open marker at a login (or clear it).
    pub(crate) fn set_open(&mut self, login: Option<String>) {
        self.open = login;
    }

    /// Record a login's lifecycle. `Collapsed` drops the entry.
    pub(crate) fn set_panel(&mut self, login: &str, panel: Panel) {
        if panel == Panel::Collapsed {
            self.panels.remove(login);
        } else {
            self.panels.insert(login.to_string(), panel);
        }
    }

    /// Store a login's fetched repositories permanently.
    pub(crate) fn store_repos(&mut self, login: &str, repos: Vec<Repository>) {
        self.cache.insert(login.to_string(), repos);
    }

    /// Issue the next generation token.
    pub(crate) fn issue_generation(&mut self) -> u64 {
        let issued = self.generation;
        self.generation += 1;
        issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            stargazers_count: 0,
        }
    }

    #[test]
    fn unknown_logins_are_collapsed() {
        let state = PanelsState::new();
        assert_eq!(state.panel("octocat"), Panel::Collapsed);
        assert_eq!(state.open_login(), None);
        assert!(!state.is_cached("octocat"));
    }

    #[test]
    fn collapsing_drops_the_lifecycle_entry_but_not_the_cache() {
        let mut state = PanelsState::new();
        state.store_repos("octocat", vec![repo("repo1")]);
        state.set_panel("octocat", Panel::Ready);

        state.set_panel("octocat", Panel::Collapsed);

        assert_eq!(state.panel("octocat"), Panel::Collapsed);
        assert!(state.is_cached("octocat"));
        assert_eq!(state.cached("octocat").map(<[Repository]>::len), Some(1));
    }

    #[test]
    fn generations_are_monotonic() {
        let mut state = PanelsState::new();
        assert_eq!(state.issue_generation(), 0);
        assert_eq!(state.issue_generation(), 1);
        assert_eq!(state.issue_generation(), 2);
    }
}
