//! Application configuration and environment variable parsing.
//!
//! This module handles loading configuration settings from the environment.
//! It defines the `AppConfig` struct which names the repository the metrics
//! are computed against and governs behavior such as the GitHub API page
//! limit. The repository identity is always passed around explicitly; there
//! is no process-wide default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    /// The owner of the repository (e.g., "DataDog").
    pub owner: String,
    /// The name of the repository (e.g., "datadog-agent").
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Owner of the repository the metrics are computed against.
    pub repo_owner: String,

    /// Name of the repository the metrics are computed against.
    pub repo_name: String,

    /// Hard limit on the number of paginated requests to make to the
    /// GitHub API per listing call. Defaults to 30 if not specified.
    #[serde(default = "default_max_api_pages")]
    pub max_github_api_pages: u32,

    /// Optional GitHub Personal Access Token for higher rate limits.
    pub github_token: Option<String>,
}

fn default_max_api_pages() -> u32 {
    30
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// The repository identity all queries are scoped to.
    pub fn repo_id(&self) -> RepoId {
        RepoId {
            owner: self.repo_owner.clone(),
            repo: self.repo_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_config_from_env() {
        // Set env vars
        env::set_var("REPO_OWNER", "some_owner");
        env::set_var("REPO_NAME", "some_repo");
        env::set_var("MAX_GITHUB_API_PAGES", "5");
        env::set_var("GITHUB_TOKEN", "token123");

        let config = AppConfig::from_env().expect("Failed to load config");

        assert_eq!(config.repo_owner, "some_owner");
        assert_eq!(config.repo_name, "some_repo");
        assert_eq!(config.max_github_api_pages, 5);
        assert_eq!(config.github_token.as_deref(), Some("token123"));
        assert_eq!(config.repo_id().to_string(), "some_owner/some_repo");

        // Clean up
        env::remove_var("REPO_OWNER");
        env::remove_var("REPO_NAME");
        env::remove_var("MAX_GITHUB_API_PAGES");
        env::remove_var("GITHUB_TOKEN");
    }

    #[test]
    #[serial]
    fn test_config_page_limit_default() {
        env::set_var("REPO_OWNER", "some_owner");
        env::set_var("REPO_NAME", "some_repo");
        env::remove_var("MAX_GITHUB_API_PAGES");
        env::remove_var("GITHUB_TOKEN");

        let config = AppConfig::from_env().expect("Failed to load config");
        assert_eq!(config.max_github_api_pages, 30);
        assert!(config.github_token.is_none());

        env::remove_var("REPO_OWNER");
        env::remove_var("REPO_NAME");
    }

    #[test]
    #[serial]
    fn test_config_missing_vars() {
        // Ensure a var is missing
        env::remove_var("REPO_OWNER");
        let result = AppConfig::from_env();
        assert!(result.is_err());
    }
}
