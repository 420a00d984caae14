//! Central store slice for GitHub data.
//!
//! Holds the searched users, the most recently fetched repositories, the
//! shared loading flag, and the error banner. The two async operations,
//! "search users" and "fetch repos for user", are commands whose spawned
//! effects feed a fulfilled or rejected completion event back into the
//! reducer.
//!
//! # Data flow
//!
//! ```text
//! Search bar submit → SearchUsers → gateway call → UsersFetched / UsersFetchFailed
//! Panel expansion  → FetchRepos  → gateway call → ReposFetched / ReposFetchFailed
//! ```
//!
//! Failure policy: gateway errors are caught at the effect boundary and
//! mapped to two fixed banner strings. No retries, no partial results.

pub mod actions;
pub mod environment;
pub mod reducer;
pub mod types;

pub use actions::GithubAction;
pub use environment::{ApiGateway, GithubEnvironment, UserGateway};
pub use reducer::GithubReducer;
pub use types::{FETCH_REPOS_ERROR, FETCH_USERS_ERROR, GithubState};
