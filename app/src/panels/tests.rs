//! Unit and store-level tests for the user-panel state machine.
//!
//! Covers expansion, implicit collapse, the cached reveal path, stale
//! generation handling, and the panel-count invariant.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use super::*;
use crate::panels::environment::RepoLoader;
use proptest::prelude::*;
use repo_explorer_core::reducer::Reducer;
use repo_explorer_github::Repository;
use repo_explorer_runtime::Store;
use repo_explorer_testing::{ReducerTest, assertions};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Loader returning canned repositories and counting invocations.
struct CountingLoader {
    repos: Vec<Repository>,
    calls: Arc<AtomicUsize>,
}

impl CountingLoader {
    fn new(repos: Vec<Repository>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                repos,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl RepoLoader for CountingLoader {
    fn load_repos<'a>(
        &'a self,
        _login: &'a str,
    ) -> Pin<Box<dyn Future<Output = Vec<Repository>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let repos = self.repos.clone();
        Box::pin(async move { repos })
    }
}

fn repo(name: &str, stars: u64) -> Repository {
    Repository {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        stargazers_count: stars,
    }
}

fn test_env() -> PanelsEnvironment {
    let (loader, _) = CountingLoader::new(vec![repo("repo1", 10)]);
    PanelsEnvironment::new(Arc::new(loader), Duration::from_millis(10))
}

/// Run a bare toggle against a fresh reducer, returning the updated state.
fn toggled(state: PanelsState, login: &str) -> PanelsState {
    let mut state = state;
    let reducer = PanelsReducer::new();
    reducer.reduce(
        &mut state,
        PanelsAction::ToggleUser {
            login: login.to_string(),
        },
        &test_env(),
    );
    state
}

// ============================================================================
// Transition tests
// ============================================================================

#[test]
fn first_toggle_enters_loading_with_fetch_effect() {
    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(PanelsState::new())
        .when_action(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.open_login(), Some("octocat"));
            assert!(matches!(state.panel("octocat"), Panel::Loading { .. }));
        })
        .then_effects(|effects| {
            assertions::assert_effects_count(effects, 1);
            assertions::assert_has_future_effect(effects);
        })
        .run();
}

#[test]
fn toggling_open_panel_collapses_without_effects() {
    let state = toggled(PanelsState::new(), "octocat");

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.open_login(), None);
            assert_eq!(state.panel("octocat"), Panel::Collapsed);
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn second_login_implicitly_collapses_first() {
    let state = toggled(PanelsState::new(), "octocat");

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ToggleUser {
            login: "github".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.open_login(), Some("github"));
            assert_eq!(state.panel("octocat"), Panel::Collapsed);
            assert!(matches!(state.panel("github"), Panel::Loading { .. }));
        })
        .run();
}

#[test]
fn cached_login_enters_revealing_with_delay_effect() {
    let mut state = PanelsState::new();
    state.store_repos("octocat", vec![repo("repo1", 10)]);

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .then_state(|state| {
            assert!(matches!(state.panel("octocat"), Panel::Revealing { .. }));
        })
        .then_effects(|effects| {
            assertions::assert_effects_count(effects, 1);
            assertions::assert_has_delay_effect(effects);
        })
        .run();
}

#[test]
fn matching_resolution_caches_and_readies() {
    let state = toggled(PanelsState::new(), "octocat");
    let Panel::Loading { generation } = state.panel("octocat") else {
        unreachable!("first toggle must enter Loading");
    };

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ReposResolved {
            login: "octocat".to_string(),
            generation,
            repos: vec![repo("repo1", 10)],
        })
        .then_state(|state| {
            assert_eq!(state.panel("octocat"), Panel::Ready);
            assert_eq!(state.cached("octocat").map(<[Repository]>::len), Some(1));
        })
        .then_effects(assertions::assert_no_effects)
        .run();
}

#[test]
fn failed_fetch_resolves_to_a_cached_empty_list() {
    let state = toggled(PanelsState::new(), "octocat");
    let Panel::Loading { generation } = state.panel("octocat") else {
        unreachable!("first toggle must enter Loading");
    };

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ReposResolved {
            login: "octocat".to_string(),
            generation,
            repos: vec![],
        })
        .then_state(|state| {
            assert_eq!(state.panel("octocat"), Panel::Ready);
            // Cached as an empty list: the next expansion will not refetch.
            assert!(state.is_cached("octocat"));
            assert_eq!(state.cached("octocat").map(<[Repository]>::len), Some(0));
        })
        .run();
}

#[test]
fn resolution_after_collapse_is_dropped() {
    let mut state = toggled(PanelsState::new(), "octocat");
    let Panel::Loading { generation } = state.panel("octocat") else {
        unreachable!("first toggle must enter Loading");
    };
    state = toggled(state, "octocat"); // collapse while the fetch is in flight

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::ReposResolved {
            login: "octocat".to_string(),
            generation,
            repos: vec![repo("late", 1)],
        })
        .then_state(|state| {
            assert_eq!(state.panel("octocat"), Panel::Collapsed);
            assert!(!state.is_cached("octocat"));
        })
        .run();
}

#[test]
fn resolution_for_a_superseded_generation_is_dropped() {
    // Expand, collapse, expand again: the second expansion issues a new
    // generation and a new fetch.
    let mut state = toggled(PanelsState::new(), "octocat");
    let Panel::Loading {
        generation: first_generation,
    } = state.panel("octocat")
    else {
        unreachable!("first toggle must enter Loading");
    };
    state = toggled(state, "octocat");
    state = toggled(state, "octocat");
    let Panel::Loading {
        generation: second_generation,
    } = state.panel("octocat")
    else {
        unreachable!("re-expansion without cache must enter Loading");
    };
    assert_ne!(first_generation, second_generation);

    let reducer = PanelsReducer::new();
    let env = test_env();

    // The slow first fetch lands after the re-expansion: dropped.
    reducer.reduce(
        &mut state,
        PanelsAction::ReposResolved {
            login: "octocat".to_string(),
            generation: first_generation,
            repos: vec![repo("stale", 1)],
        },
        &env,
    );
    assert!(matches!(state.panel("octocat"), Panel::Loading { .. }));
    assert!(!state.is_cached("octocat"));

    // The current fetch lands: applied.
    reducer.reduce(
        &mut state,
        PanelsAction::ReposResolved {
            login: "octocat".to_string(),
            generation: second_generation,
            repos: vec![repo("fresh", 2)],
        },
        &env,
    );
    assert_eq!(state.panel("octocat"), Panel::Ready);
    assert_eq!(state.cached("octocat").unwrap()[0].name, "fresh");
}

#[test]
fn matching_reveal_elapse_readies() {
    let mut state = PanelsState::new();
    state.store_repos("octocat", vec![repo("repo1", 10)]);
    state = toggled(state, "octocat");
    let Panel::Revealing { generation } = state.panel("octocat") else {
        unreachable!("cached toggle must enter Revealing");
    };

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::RevealElapsed {
            login: "octocat".to_string(),
            generation,
        })
        .then_state(|state| {
            assert_eq!(state.panel("octocat"), Panel::Ready);
        })
        .run();
}

#[test]
fn reveal_after_collapse_is_dropped() {
    let mut state = PanelsState::new();
    state.store_repos("octocat", vec![repo("repo1", 10)]);
    state = toggled(state, "octocat");
    let Panel::Revealing { generation } = state.panel("octocat") else {
        unreachable!("cached toggle must enter Revealing");
    };
    state = toggled(state, "octocat"); // collapse before the delay fires

    ReducerTest::new(PanelsReducer::new())
        .with_env(test_env())
        .given_state(state)
        .when_action(PanelsAction::RevealElapsed {
            login: "octocat".to_string(),
            generation,
        })
        .then_state(|state| {
            assert_eq!(state.panel("octocat"), Panel::Collapsed);
        })
        .run();
}

// ============================================================================
// Store-level tests
// ============================================================================

#[tokio::test]
async fn first_expansion_loads_once_and_second_uses_the_cache() {
    let (loader, calls) = CountingLoader::new(vec![repo("repo1", 10)]);
    let env = PanelsEnvironment::new(Arc::new(loader), Duration::from_millis(100));
    let store = Store::new(PanelsState::new(), PanelsReducer::new(), env);

    // First expansion fetches.
    let mut handle = store
        .send(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;

    assert_eq!(store.state(|s| s.panel("octocat")).await, Panel::Ready);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Collapse, re-expand: reveal from cache, no new load.
    store
        .send(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .await
        .unwrap();
    let mut handle = store
        .send(PanelsAction::ToggleUser {
            login: "octocat".to_string(),
        })
        .await
        .unwrap();

    assert!(matches!(
        store.state(|s| s.panel("octocat")).await,
        Panel::Revealing { .. }
    ));

    handle.wait().await;
    tokio::task::yield_now().await;

    assert_eq!(store.state(|s| s.panel("octocat")).await, Panel::Ready);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    /// At most one panel is ever non-collapsed, and the open marker always
    /// points at it, for any sequence of clicks.
    #[test]
    fn at_most_one_panel_is_open(clicks in proptest::collection::vec(0_usize..3, 1..40)) {
        let logins = ["alpha", "beta", "gamma"];
        let reducer = PanelsReducer::new();
        let env = test_env();
        let mut state = PanelsState::new();

        for click in clicks {
            reducer.reduce(
                &mut state,
                PanelsAction::ToggleUser { login: logins[click].to_string() },
                &env,
            );

            let expanded: Vec<&str> = logins
                .iter()
                .copied()
                .filter(|login| state.panel(login) != Panel::Collapsed)
                .collect();
            prop_assert!(expanded.len() <= 1);
            prop_assert_eq!(state.open_login(), expanded.first().copied());
        }
    }
}
