//! HTTP Basic authentication with a GitHub username and personal access token.

use crate::auth::provider::{AuthHeader, AuthProvider};
use crate::error::AuthError;
use crate::util::SecretString;
use async_trait::async_trait;

/// Basic authentication provider
#[derive(Debug, Clone)]
pub struct BasicAuthProvider {
    username: String,
    token: SecretString,
}

impl BasicAuthProvider {
    /// Create a new provider; both parts of the credential must be non-empty
    pub fn new(username: impl Into<String>, token: impl Into<SecretString>) -> Result<Self, AuthError> {
        let username = username.into();
        let token = token.into();

        if username.trim().is_empty() {
            return Err(AuthError::MissingUsername);
        }
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(Self { username, token })
    }
}

#[async_trait]
impl AuthProvider for BasicAuthProvider {
    async fn get_auth_header(&self) -> Result<AuthHeader, AuthError> {
        Ok(AuthHeader::Basic {
            username: self.username.clone(),
            password: self.token.clone(),
        })
    }

    fn auth_type(&self) -> &'static str {
        "Basic"
    }
}
