//! # Repo Explorer Testing
//!
//! Testing utilities and helpers for the repo-explorer architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effect lists ([`reducer_test::assertions`])
//!
//! ## Example
//!
//! ```ignore
//! use repo_explorer_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(GithubReducer::new())
//!     .with_env(test_environment())
//!     .given_state(GithubState::default())
//!     .when_action(GithubAction::SearchUsers { query: "octo".into() })
//!     .then_state(|state| assert!(state.loading))
//!     .then_effects(assertions::assert_has_future_effect)
//!     .run();
//! ```


// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
