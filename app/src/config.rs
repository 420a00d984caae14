//! Configuration management for the explorer.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API configuration
    pub github: GithubConfig,
    /// Interaction tuning
    pub ui: UiConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API origin (`GITHUB_API_URL`)
    pub api_url: String,
    /// Per-request timeout in seconds (`GITHUB_REQUEST_TIMEOUT`)
    pub request_timeout: u64,
}

/// Interaction tuning
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Reveal delay for cached panels in milliseconds (`REVEAL_DELAY_MS`)
    pub reveal_delay_ms: u64,
    /// Repo-fetch adapter timeout in seconds (`REPO_FETCH_TIMEOUT`)
    pub repo_fetch_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            github: GithubConfig {
                api_url: env::var("GITHUB_API_URL")
                    .unwrap_or_else(|_| "https://api.github.com".to_string()),
                request_timeout: env::var("GITHUB_REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
            ui: UiConfig {
                reveal_delay_ms: env::var("REVEAL_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(300),
                repo_fetch_timeout: env::var("REPO_FETCH_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
        }
    }

    /// Per-request HTTP timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.github.request_timeout)
    }

    /// Cosmetic delay before a cached panel's content becomes visible.
    #[must_use]
    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.ui.reveal_delay_ms)
    }

    /// How long the repo-fetch adapter waits for a terminal phase.
    #[must_use]
    pub const fn repo_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.ui.repo_fetch_timeout)
    }
}
