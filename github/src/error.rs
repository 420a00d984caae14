//! Error types for the GitHub API client

use thiserror::Error;

/// Errors that can occur when interacting with the GitHub API
#[derive(Debug, Error)]
pub enum GithubError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// HTTP request failed (connection, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Rate limited - too many unauthenticated requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },
}
