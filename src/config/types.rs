//! Configuration types for issue-probe
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::util::SecretString;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub connection settings
    pub github: GitHubConfig,

    /// Inputs for the check scenario
    pub scenario: ScenarioConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// GitHub connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API host (e.g., `https://api.github.com`)
    pub url: String,

    /// Account that owns the repositories
    pub owner: String,

    /// Username for Basic authentication
    pub username: String,

    /// Personal access token (prefer env var GITHUB_TOKEN)
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            url: "https://api.github.com".to_string(),
            owner: "testnakov".to_string(),
            username: String::new(),
            token: None,
            timeout_secs: 30,
            verify_ssl: true,
        }
    }
}

impl GitHubConfig {
    /// Base URL all repository endpoints hang off: `{url}/repos/{owner}`
    pub fn repos_url(&self) -> String {
        format!(
            "{}/repos/{}",
            self.url.trim_end_matches('/'),
            crate::util::encode_segment(&self.owner)
        )
    }
}

/// Fixed inputs of the ordered check scenario
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Repository the scenario runs against
    pub repo: String,

    /// Existing issue fetched by number
    pub issue_number: u64,

    /// Existing issue that carries labels and comments
    pub labelled_issue_number: u64,

    pub issue_title: String,
    pub issue_body: String,
    pub comment_body: String,
    pub edited_comment_body: String,

    /// Close the issue created by the scenario once it finishes
    pub close_created_issue: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            repo: "test-nakov-repo".to_string(),
            issue_number: 1,
            labelled_issue_number: 6,
            issue_title: "Create Your Own Title".to_string(),
            issue_body: "Give Some Description".to_string(),
            comment_body: "Let me see".to_string(),
            edited_comment_body: "Updated text on the comment.".to_string(),
            close_created_issue: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
