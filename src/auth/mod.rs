//! Authentication module
//!
//! Requests are authenticated with HTTP Basic credentials: the configured
//! username plus a personal access token. Token discovery (config file,
//! `GITHUB_TOKEN`, `GH_TOKEN`) happens once, in the config loader.

pub mod basic;
pub mod provider;

pub use basic::BasicAuthProvider;
pub use provider::{AuthHeader, AuthProvider, BoxedAuthProvider};

use crate::config::GitHubConfig;
use crate::error::AuthError;

/// Create an auth provider from configuration
pub fn create_auth_provider(config: &GitHubConfig) -> Result<BoxedAuthProvider, AuthError> {
    let token = config.token.clone().ok_or(AuthError::NotConfigured)?;
    Ok(Box::new(BasicAuthProvider::new(&config.username, token)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(username: &str, token: Option<&str>) -> GitHubConfig {
        GitHubConfig {
            username: username.to_string(),
            token: token.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_from_config_token() {
        let provider = create_auth_provider(&config("octocat", Some("ghp_x"))).unwrap();
        assert_eq!(provider.auth_type(), "Basic");
    }

    #[test]
    fn test_missing_token_is_not_configured() {
        let result = create_auth_provider(&config("octocat", None));
        assert!(matches!(result, Err(AuthError::NotConfigured)));
    }

    #[test]
    fn test_blank_credentials_rejected() {
        assert!(matches!(
            create_auth_provider(&config("", Some("ghp_x"))),
            Err(AuthError::MissingUsername)
        ));
        assert!(matches!(
            create_auth_provider(&config("octocat", Some(" "))),
            Err(AuthError::InvalidToken)
        ));
    }
}
