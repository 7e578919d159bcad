//! Error types for issue-probe
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API,
//! and convert to `anyhow` only at the binary boundary.

use crate::scenario::Step;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// GitHub API specific errors
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized: invalid username or token")]
    Unauthorized,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("GitHub API request failed (HTTP {status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Failed to deserialize response: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl GitHubError {
    /// Create an appropriate error from an HTTP status code and response body
    ///
    /// `resource` is the endpoint that was requested and ends up in `NotFound`.
    /// Rate limits signalled through headers are detected by the client before
    /// this is called.
    pub fn from_response(status: u16, resource: &str, body: &str) -> Self {
        match status {
            401 => GitHubError::Unauthorized,
            404 => GitHubError::NotFound {
                resource: resource.to_string(),
            },
            429 => GitHubError::RateLimited {
                retry_after: DEFAULT_RETRY_AFTER_SECS,
            },
            _ => GitHubError::RequestFailed {
                status,
                body: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.to_string()
                },
            },
        }
    }

    /// Whether this error means the requested entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::NotFound { .. })
    }
}

/// Retry-After fallback when GitHub does not send the header
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No GitHub token configured (set GITHUB_TOKEN)")]
    NotConfigured,

    #[error("Username must not be empty")]
    MissingUsername,

    #[error("Invalid token format")]
    InvalidToken,
}

/// Failure of a single scenario step
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Api(#[from] GitHubError),

    #[error("authentication setup failed: {0}")]
    Auth(#[from] AuthError),

    #[error("assertion failed: {0}")]
    Assertion(String),
}

/// The step that aborted a scenario run and why
#[derive(Error, Debug)]
#[error("step {step} failed: {source}")]
pub struct ScenarioError {
    pub step: Step,
    #[source]
    pub source: StepError,
}

impl ScenarioError {
    pub fn new(step: Step, source: impl Into<StepError>) -> Self {
        Self {
            step,
            source: source.into(),
        }
    }

    /// Whether the step failed because the remote entity was missing
    pub fn is_not_found(&self) -> bool {
        matches!(&self.source, StepError::Api(e) if e.is_not_found())
    }
}

/// Result type alias for GitHub API operations
pub type GitHubResult<T> = std::result::Result<T, GitHubError>;

/// Result type alias for scenario steps
pub type StepResult<T> = std::result::Result<T, StepError>;
