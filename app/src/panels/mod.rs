//! User-panel state machine.
//!
//! The user list keeps its own state, independent of the central store:
//! one tagged [`Panel`] lifecycle per login, a single open marker, and a
//! permanent per-login repository cache.
//!
//! # Lifecycle
//!
//! ```text
//! Collapsed --toggle, cache miss--> Loading   --repos resolved--> Ready
//! Collapsed --toggle, cache hit---> Revealing --delay elapsed---> Ready
//! any expanded state --toggle same login--> Collapsed
//! ```
//!
//! Expansion issues a generation token; async completions must present it
//! or they are dropped as stale. Repositories are fetched through the
//! injected [`RepoLoader`] callback, which resolves with an empty list on
//! failure: a failed panel shows "no repositories", never a banner.

pub mod actions;
pub mod environment;
pub mod reducer;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::PanelsAction;
pub use environment::{PanelsEnvironment, RepoLoader};
pub use reducer::PanelsReducer;
pub use types::{Panel, PanelsState};
