//! GitHub Issues API client and live check scenario
//!
//! `issue-probe` wraps the GitHub REST endpoints for issues, labels and issue
//! comments in a small typed client, and drives that client through a fixed,
//! ordered scenario that reads existing issues and then creates, reads, edits
//! and deletes a comment on a freshly opened issue.
//!
//! ## Example Configuration
//!
//! ```toml
//! [github]
//! url = "https://api.github.com"
//! owner = "testnakov"
//! username = "octocat"
//! # token from GITHUB_TOKEN env var
//!
//! [scenario]
//! repo = "test-nakov-repo"
//! close_created_issue = true
//! ```
//!
//! ## Using the client directly
//!
//! ```rust,no_run
//! use issue_probe::{auth::create_auth_provider, config::GitHubConfig, github::GitHubClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GitHubConfig {
//!     owner: "testnakov".into(),
//!     username: "octocat".into(),
//!     token: Some("ghp_...".into()),
//!     ..Default::default()
//! };
//! let client = GitHubClient::new(&config, create_auth_provider(&config)?)?;
//! let comment = client.create_comment("test-nakov-repo", 6, "Let me see").await?;
//! client.delete_comment("test-nakov-repo", comment.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod scenario;
pub mod util;

// Re-export main types
pub use config::{AppConfig, load_config};
pub use error::{ConfigError, GitHubError, ScenarioError, StepError};
pub use github::GitHubClient;
pub use scenario::{Scenario, ScenarioReport, Step};
