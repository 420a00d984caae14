//! Page composition: wires the search bar, the central store, and the
//! user panels together.
//!
//! Pure wiring: the page owns the two stores, hands the panels a
//! repo-fetch adapter that dispatches through the central store, and
//! renders state snapshots as text (banners, user list, panel content).

use crate::github::{
    GithubAction, GithubEnvironment, GithubReducer, GithubState, UserGateway,
};
use crate::panels::{
    Panel, PanelsAction, PanelsEnvironment, PanelsReducer, PanelsState, RepoLoader,
};
use repo_explorer_github::Repository;
use repo_explorer_runtime::{EffectHandle, Store, StoreError};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Store alias for the central github slice.
pub type GithubStore = Store<GithubState, GithubAction, GithubEnvironment, GithubReducer>;

/// Store alias for the user panels.
pub type PanelsStore = Store<PanelsState, PanelsAction, PanelsEnvironment, PanelsReducer>;

/// Loading sentence shown while an operation is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Message inside an expanded panel whose account has no repositories.
pub const NO_REPOSITORIES: &str = "No repositories found.";

/// Placeholder for a repository without a description.
pub const NO_DESCRIPTION: &str = "No description provided.";

const TITLE: &str = "Repositories Explorer";
const SUBTITLE: &str = "Find repositories from GitHub users";

/// Repo-fetch adapter handed to the panels.
///
/// Dispatches `FetchRepos` on the central store and waits for the
/// operation's terminal phase. Every non-success path (rejected phase,
/// timeout, closed store) degrades to an empty list, honoring the loader
/// contract that panels never see an error.
#[derive(Clone)]
pub struct DispatchLoader {
    store: Arc<GithubStore>,
    timeout: Duration,
}

impl DispatchLoader {
    /// Create an adapter over the central store.
    #[must_use]
    pub const fn new(store: Arc<GithubStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

impl RepoLoader for DispatchLoader {
    fn load_repos<'a>(
        &'a self,
        login: &'a str,
    ) -> Pin<Box<dyn Future<Output = Vec<Repository>> + Send + 'a>> {
        Box::pin(async move {
            let result = self
                .store
                .send_and_wait_for(
                    GithubAction::FetchRepos {
                        login: login.to_string(),
                    },
                    |action| {
                        matches!(
                            action,
                            GithubAction::ReposFetched { .. } | GithubAction::ReposFetchFailed
                        )
                    },
                    self.timeout,
                )
                .await;

            match result {
                Ok(GithubAction::ReposFetched { repos }) => repos,
                Ok(_) => Vec::new(),
                Err(error) => {
                    tracing::warn!(%error, login, "repo fetch did not complete");
                    Vec::new()
                }
            }
        })
    }
}

/// The assembled page: both stores wired together.
pub struct Page {
    /// Central store backing search results and banners.
    pub github: Arc<GithubStore>,
    /// Component-local store backing the user panels.
    pub panels: PanelsStore,
}

impl Page {
    /// Wire the stores together.
    ///
    /// The panels' repo loader dispatches through the central store, so a
    /// panel expansion drives the full three-phase operation there.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn UserGateway>,
        reveal_delay: Duration,
        repo_fetch_timeout: Duration,
    ) -> Self {
        let github = Arc::new(Store::new(
            GithubState::new(),
            GithubReducer::new(),
            GithubEnvironment::new(gateway),
        ));
        let loader = Arc::new(DispatchLoader::new(Arc::clone(&github), repo_fetch_timeout));
        let panels = Store::new(
            PanelsState::new(),
            PanelsReducer::new(),
            PanelsEnvironment::new(loader, reveal_delay),
        );

        Self { github, panels }
    }

    /// Submit a search query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn search(&self, query: String) -> Result<EffectHandle, StoreError> {
        self.github.send(GithubAction::SearchUsers { query }).await
    }

    /// Toggle a user's panel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn toggle_user(&self, login: String) -> Result<EffectHandle, StoreError> {
        self.panels.send(PanelsAction::ToggleUser { login }).await
    }

    /// Render the current snapshot of both stores.
    pub async fn render(&self) -> String {
        let github = self.github.state(Clone::clone).await;
        let panels = self.panels.state(Clone::clone).await;
        render(&github, &panels)
    }

    /// Shut both stores down, draining pending effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if either store still has
    /// effects running when the timeout expires.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        let github = self.github.shutdown(timeout).await;
        let panels = self.panels.shutdown(timeout).await;
        github.and(panels)
    }
}

/// Render a snapshot of both stores into the page text.
#[must_use]
pub fn render(github: &GithubState, panels: &PanelsState) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    let _ = writeln!(out);

    if github.loading {
        let _ = writeln!(out, "{LOADING_MESSAGE}");
    }
    if let Some(error) = &github.error {
        let _ = writeln!(out, "! {error}");
    }

    for user in &github.users {
        let login = user.login.as_str();
        let is_open = panels.open_login() == Some(login);
        let marker = if is_open { "▾" } else { "▸" };
        let _ = writeln!(out, "{marker} {login}");

        if !is_open {
            continue;
        }

        match panels.panel(login) {
            Panel::Loading { .. } => {
                let _ = writeln!(out, "    Loading repositories...");
            }
            // Content stays hidden until the reveal delay fires.
            Panel::Revealing { .. } | Panel::Collapsed => {}
            Panel::Ready => match panels.cached(login) {
                Some([]) | None => {
                    let _ = writeln!(out, "    {NO_REPOSITORIES}");
                }
                Some(repos) => {
                    for repo in repos {
                        let _ = writeln!(out, "    {}  ★ {}", repo.name, repo.stargazers_count);
                        let description = repo.description.as_deref().unwrap_or(NO_DESCRIPTION);
                        let _ = writeln!(out, "      {description}");
                    }
                }
            },
        }
    }

    out
}
