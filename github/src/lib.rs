//! # GitHub API Client
//!
//! Minimal Rust client for the two GitHub REST endpoints the repo explorer
//! consumes: user search and per-user repository listing.
//!
//! ## Example
//!
//! ```no_run
//! use repo_explorer_github::GithubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GithubClient::new()?;
//!
//!     let users = client.search_users("octocat").await?;
//!     for user in &users {
//!         let repos = client.user_repos(&user.login).await?;
//!         println!("{}: {} repositories", user.login, repos.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! - Read-only GETs against a fixed API origin (overridable for tests)
//! - No authentication, no retries, no caching, first result page only
//! - Failures map to a small typed taxonomy ([`GithubError`])

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{GithubClient, SEARCH_PAGE_SIZE};
pub use error::GithubError;
pub use types::{Repository, SearchUsersResponse, User};
