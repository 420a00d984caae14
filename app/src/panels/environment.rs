//! Environment for the panels reducer.

use repo_explorer_github::Repository;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Callback boundary through which panels fetch repositories.
///
/// Implementations must resolve, never fail: a failed fetch degrades to an
/// empty list, so the panel renders "no repositories" while the global
/// banner path stays the central store's concern. This is deliberately
/// asymmetric with the search path, which does surface a banner.
pub trait RepoLoader: Send + Sync {
    /// Fetch the given account's repositories, empty on any failure.
    fn load_repos<'a>(
        &'a self,
        login: &'a str,
    ) -> Pin<Box<dyn Future<Output = Vec<Repository>> + Send + 'a>>;
}

/// Environment dependencies for the panels reducer.
#[derive(Clone)]
pub struct PanelsEnvironment {
    /// Loader invoked on a login's first expansion.
    pub loader: Arc<dyn RepoLoader>,

    /// Cosmetic delay before a cached panel's content becomes visible.
    /// Gates visibility only; the data is already present.
    pub reveal_delay: Duration,
}

impl PanelsEnvironment {
    /// Create a new environment.
    #[must_use]
    pub fn new(loader: Arc<dyn RepoLoader>, reveal_delay: Duration) -> Self {
        Self {
            loader,
            reveal_delay,
        }
    }
}
