//! GitHub API client implementation

use crate::{
    error::GithubError,
    types::{Repository, SearchUsersResponse, User},
};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Number of user search results requested per page.
///
/// The explorer only ever queries the first page; the cap matches what the
/// user list displays.
pub const SEARCH_PAGE_SIZE: u32 = 5;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("repo-explorer/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client
///
/// Read-only and unauthenticated: two GET endpoints, no retries, no caching.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    /// Create a new client against the public GitHub API
    ///
    /// # Errors
    ///
    /// Returns `GithubError::ClientBuild` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self, GithubError> {
        Self::with_options(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    /// Create a new client against a custom API origin
    ///
    /// Used by tests to point the client at a mock server.
    ///
    /// # Errors
    ///
    /// Returns `GithubError::ClientBuild` if the underlying HTTP client
    /// cannot be constructed.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, GithubError> {
        Self::with_options(api_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with explicit API origin and request timeout
    ///
    /// # Errors
    ///
    /// Returns `GithubError::ClientBuild` if the underlying HTTP client
    /// cannot be constructed.
    pub fn with_options(
        api_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GithubError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Search accounts whose login matches the query
    ///
    /// Issues `GET /search/users?q={query}&per_page=5` and unwraps the
    /// `items` envelope.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx statuses, or parsing
    /// failures. Unauthenticated rate limiting (403/429) maps to
    /// [`GithubError::RateLimited`].
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, GithubError> {
        let per_page = SEARCH_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/search/users", self.api_url))
            .query(&[("q", query), ("per_page", per_page.as_str())])
            .header("accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| GithubError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<SearchUsersResponse>()
                .await
                .map(|body| body.items)
                .map_err(|e| GithubError::ResponseParseFailed(e.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                Err(GithubError::RateLimited)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GithubError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// List an account's repositories
    ///
    /// Issues `GET /users/{login}/repos` and returns the repositories
    /// normalized to the fields the explorer renders.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx statuses, or parsing
    /// failures, with rate limiting mapped as in [`Self::search_users`].
    pub async fn user_repos(&self, login: &str) -> Result<Vec<Repository>, GithubError> {
        let response = self
            .client
            .get(format!("{}/users/{login}/repos", self.api_url))
            .header("accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| GithubError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<Vec<Repository>>()
                .await
                .map_err(|e| GithubError::ResponseParseFailed(e.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                Err(GithubError::RateLimited)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GithubError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}
