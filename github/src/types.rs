//! Typed responses from the GitHub REST API
//!
//! Only the fields the explorer renders are modeled; serde ignores the rest
//! of the (large) API payloads.

use serde::{Deserialize, Serialize};

/// A GitHub account as returned by the user search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The account's unique username, used as the cache key throughout
    pub login: String,
}

/// Envelope returned by `GET /search/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    /// Matching accounts, capped server-side by `per_page`
    pub items: Vec<User>,
}

/// A repository as rendered in a user's panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Free-text description; the API returns `null` for repositories
    /// without one
    #[serde(default)]
    pub description: Option<String>,
    /// Star count
    pub stargazers_count: u64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code

    use super::*;

    #[test]
    fn user_ignores_extra_search_fields() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "type": "User",
            "score": 1.0
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
    }

    #[test]
    fn search_response_unwraps_items() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [{"login": "octocat"}, {"login": "github"}]
        }"#;

        let response: SearchUsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].login, "octocat");
    }

    #[test]
    fn repository_accepts_null_description() {
        let json = r#"{
            "name": "hello-world",
            "description": null,
            "stargazers_count": 42,
            "fork": false
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.description, None);
        assert_eq!(repo.stargazers_count, 42);
    }

    #[test]
    fn repository_accepts_missing_description() {
        let json = r#"{"name": "bare", "stargazers_count": 0}"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, None);
    }
}
