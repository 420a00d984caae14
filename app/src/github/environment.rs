//! Environment for the github slice reducer.

use repo_explorer_github::{GithubClient, GithubError, Repository, User};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Gateway the two fetch operations run against.
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
/// `async fn` so it stays object-safe behind `Arc<dyn UserGateway>`.
/// Production wraps the HTTP client; tests substitute canned responses.
pub trait UserGateway: Send + Sync {
    /// Search accounts whose login matches the query.
    fn search_users<'a>(
        &'a self,
        query: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<User>, GithubError>> + Send + 'a>>;

    /// List an account's repositories.
    fn user_repos<'a>(
        &'a self,
        login: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Repository>, GithubError>> + Send + 'a>>;
}

/// Production gateway backed by the GitHub HTTP client.
#[derive(Clone, Debug)]
pub struct ApiGateway {
    client: GithubClient,
}

impl ApiGateway {
    /// Create a gateway over an already-configured client.
    #[must_use]
    pub const fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

impl UserGateway for ApiGateway {
    fn search_users<'a>(
        &'a self,
        query: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<User>, GithubError>> + Send + 'a>> {
        Box::pin(self.client.search_users(query))
    }

    fn user_repos<'a>(
        &'a self,
        login: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Repository>, GithubError>> + Send + 'a>> {
        Box::pin(self.client.user_repos(login))
    }
}

/// Environment dependencies for the github slice reducer.
#[derive(Clone)]
pub struct GithubEnvironment {
    /// Gateway used by both operations.
    pub gateway: Arc<dyn UserGateway>,
}

impl GithubEnvironment {
    /// Create a new environment around a gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }
}
