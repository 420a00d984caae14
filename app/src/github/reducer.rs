//! Reducer for the central github slice.
//!
//! Commands flip the shared `loading` flag and spawn one `Effect::Future`
//! each; the future resolves to exactly one completion event. Gateway
//! errors never escape the effect; they are mapped to the slice's fixed
//! banner strings.

use crate::github::actions::GithubAction;
use crate::github::environment::GithubEnvironment;
use crate::github::types::{FETCH_REPOS_ERROR, FETCH_USERS_ERROR, GithubState};
use repo_explorer_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Reducer for the central github slice.
#[derive(Clone, Debug)]
pub struct GithubReducer;

impl GithubReducer {
    /// Creates a new `GithubReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for GithubReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for GithubReducer {
    type State = GithubState;
    type Action = GithubAction;
    type Environment = GithubEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            GithubAction::SearchUsers { query } => {
                state.loading = true;

                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match gateway.search_users(&query).await {
                        Ok(users) => GithubAction::UsersFetched { users },
                        Err(error) => {
                            tracing::warn!(%error, %query, "user search failed");
                            GithubAction::UsersFetchFailed
                        }
                    })
                }))]
            }

            GithubAction::FetchRepos { login } => {
                state.loading = true;

                let gateway = Arc::clone(&env.gateway);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match gateway.user_repos(&login).await {
                        Ok(repos) => GithubAction::ReposFetched { repos },
                        Err(error) => {
                            tracing::warn!(%error, %login, "repository fetch failed");
                            GithubAction::ReposFetchFailed
                        }
                    })
                }))]
            }

            // ========== Completion events ==========
            // Successes leave any previous banner in place.
            GithubAction::UsersFetched { users } => {
                state.loading = false;
                state.users = users;
                smallvec![Effect::None]
            }

            GithubAction::UsersFetchFailed => {
                state.loading = false;
                state.error = Some(FETCH_USERS_ERROR.to_string());
                smallvec![Effect::None]
            }

            GithubAction::ReposFetched { repos } => {
                state.loading = false;
                state.repos = repos;
                smallvec![Effect::None]
            }

            GithubAction::ReposFetchFailed => {
                state.loading = false;
                state.error = Some(FETCH_REPOS_ERROR.to_string());
                smallvec![Effect::None]
            }
        }
    }
}
