//! Live test context built from the environment.

use anyhow::{Context, Result, bail};
use issue_probe::auth::create_auth_provider;
use issue_probe::config::{GitHubConfig, ScenarioConfig};
use issue_probe::github::GitHubClient;
use uuid::Uuid;

/// Variable that switches the live tests on; all others are read only when set.
pub const TOKEN_VAR: &str = "ISSUE_PROBE_E2E_TOKEN";

const USER_VAR: &str = "ISSUE_PROBE_E2E_USER";
const OWNER_VAR: &str = "ISSUE_PROBE_E2E_OWNER";
const REPO_VAR: &str = "ISSUE_PROBE_E2E_REPO";
const URL_VAR: &str = "ISSUE_PROBE_E2E_URL";
const ISSUE_VAR: &str = "ISSUE_PROBE_E2E_ISSUE";
const LABELLED_ISSUE_VAR: &str = "ISSUE_PROBE_E2E_LABELLED_ISSUE";

/// Connection details and fixtures for a sandbox repository.
///
/// The repository must hold at least two issues, and the labelled issue must
/// carry at least one label and one comment.
#[derive(Debug, Clone)]
pub struct LiveContext {
    pub github: GitHubConfig,
    pub repo: String,
    pub issue_number: u64,
    pub labelled_issue_number: u64,
}

impl LiveContext {
    /// Read the context from `ISSUE_PROBE_E2E_*`.
    ///
    /// Returns `None` when no token is set so callers can skip. Once the
    /// token is present the remaining variables are required.
    pub fn from_env() -> Result<Option<Self>> {
        let Some(token) = non_empty_var(TOKEN_VAR) else {
            tracing::info!("{} not set, skipping live test", TOKEN_VAR);
            return Ok(None);
        };

        let username = required_var(USER_VAR)?;
        let owner = required_var(OWNER_VAR)?;
        let repo = required_var(REPO_VAR)?;

        let defaults = ScenarioConfig::default();
        let issue_number = number_var(ISSUE_VAR)?.unwrap_or(defaults.issue_number);
        let labelled_issue_number =
            number_var(LABELLED_ISSUE_VAR)?.unwrap_or(defaults.labelled_issue_number);

        let mut github = GitHubConfig {
            owner,
            username,
            token: Some(token.into()),
            ..Default::default()
        };
        if let Some(url) = non_empty_var(URL_VAR) {
            github.url = url;
        }

        Ok(Some(Self {
            github,
            repo,
            issue_number,
            labelled_issue_number,
        }))
    }

    /// A client authenticated for the sandbox repository.
    pub fn client(&self) -> Result<GitHubClient> {
        let auth = create_auth_provider(&self.github).context("Failed to build credentials")?;
        GitHubClient::new(&self.github, auth).context("Failed to build GitHub client")
    }

    /// Scenario inputs pointing at the sandbox, with per-run unique texts.
    ///
    /// The created issue is always closed again.
    pub fn scenario_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            repo: self.repo.clone(),
            issue_number: self.issue_number,
            labelled_issue_number: self.labelled_issue_number,
            issue_title: unique_text("e2e issue"),
            issue_body: unique_text("Opened by the issue-probe e2e suite"),
            comment_body: unique_text("e2e comment"),
            edited_comment_body: unique_text("e2e comment, edited"),
            close_created_issue: true,
        }
    }
}

/// Text with a per-call UUID suffix so concurrent runs never collide.
pub fn unique_text(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4().simple())
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(name: &str) -> Result<String> {
    match non_empty_var(name) {
        Some(value) => Ok(value),
        None => bail!("{} must be set when {} is set", name, TOKEN_VAR),
    }
}

fn number_var(name: &str) -> Result<Option<u64>> {
    non_empty_var(name)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a positive integer, got {:?}", name, v))
        })
        .transpose()
}
