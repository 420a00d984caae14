//! Reducer for the user-panel state machine.
//!
//! Every login follows `Collapsed → Loading → Ready` on its first
//! expansion and `Collapsed → Revealing → Ready` once cached. Async
//! completions carry the generation issued at expansion time; a completion
//! whose generation no longer matches the panel is dropped, so collapsing
//! or re-expanding mid-flight cannot commit stale data.

use crate::panels::actions::PanelsAction;
use crate::panels::environment::PanelsEnvironment;
use crate::panels::types::{Panel, PanelsState};
use repo_explorer_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Reducer for the user panels.
#[derive(Clone, Debug)]
pub struct PanelsReducer;

impl PanelsReducer {
    /// Creates a new `PanelsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Expand a collapsed login, collapsing whichever panel was open.
    fn expand(
        state: &mut PanelsState,
        env: &PanelsEnvironment,
        login: String,
    ) -> SmallVec<[Effect<PanelsAction>; 4]> {
        if let Some(previous) = state.open_login().map(str::to_string) {
            state.set_panel(&previous, Panel::Collapsed);
        }
        state.set_open(Some(login.clone()));

        let generation = state.issue_generation();

        if state.is_cached(&login) {
            // Data is already present; only its visibility is delayed.
            state.set_panel(&login, Panel::Revealing { generation });
            smallvec![Effect::Delay {
                duration: env.reveal_delay,
                action: Box::new(PanelsAction::RevealElapsed { login, generation }),
            }]
        } else {
            state.set_panel(&login, Panel::Loading { generation });
            let loader = Arc::clone(&env.loader);
            smallvec![Effect::Future(Box::pin(async move {
                let repos = loader.load_repos(&login).await;
                Some(PanelsAction::ReposResolved {
                    login,
                    generation,
                    repos,
                })
            }))]
        }
    }
}

impl Default for PanelsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for PanelsReducer {
    type State = PanelsState;
    type Action = PanelsAction;
    type Environment = PanelsEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            PanelsAction::ToggleUser { login } => {
                if state.open_login() == Some(login.as_str()) {
                    // Collapse hides content immediately. An in-flight
                    // fetch keeps running; its completion is dropped on
                    // arrival because the panel no longer carries its
                    // generation.
                    state.set_panel(&login, Panel::Collapsed);
                    state.set_open(None);
                    return smallvec![Effect::None];
                }

                Self::expand(state, env, login)
            }

            PanelsAction::ReposResolved {
                login,
                generation,
                repos,
            } => {
                match state.panel(&login) {
                    Panel::Loading {
                        generation: current,
                    } if current == generation => {
                        state.store_repos(&login, repos);
                        state.set_panel(&login, Panel::Ready);
                    }
                    _ => {
                        tracing::debug!(%login, generation, "dropping stale repository result");
                    }
                }
                smallvec![Effect::None]
            }

            PanelsAction::RevealElapsed { login, generation } => {
                match state.panel(&login) {
                    Panel::Revealing {
                        generation: current,
                    } if current == generation => {
                        state.set_panel(&login, Panel::Ready);
                    }
                    _ => {
                        tracing::debug!(%login, generation, "dropping stale reveal");
                    }
                }
                smallvec![Effect::None]
            }
        }
    }
}
