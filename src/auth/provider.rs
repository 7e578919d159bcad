//! Authentication provider trait

use crate::error::AuthError;
use crate::util::SecretString;
// async_trait required for dyn-compatibility with Box<dyn AuthProvider>
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Authentication provider trait
///
/// Implementations provide the credentials attached to every GitHub API
/// request.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Get the authentication header for the next request
    async fn get_auth_header(&self) -> Result<AuthHeader, AuthError>;

    /// Get a description of the auth method (for logging)
    fn auth_type(&self) -> &'static str;
}

/// Authentication header to use with requests
#[derive(Debug, Clone)]
pub enum AuthHeader {
    /// HTTP Basic credentials
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthHeader {
    /// Get the header name for this auth type
    pub fn header_name(&self) -> &'static str {
        "Authorization"
    }

    /// Get the header value for this auth type
    pub fn header_value(&self) -> String {
        match self {
            AuthHeader::Basic { username, password } => {
                let credentials = format!("{}:{}", username, password.expose_secret());
                format!("Basic {}", STANDARD.encode(credentials))
            }
        }
    }
}

/// Box type alias for auth providers
pub type BoxedAuthProvider = Box<dyn AuthProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_value() {
        let header = AuthHeader::Basic {
            username: "username".to_string(),
            password: "token".into(),
        };
        assert_eq!(header.header_name(), "Authorization");
        // base64("username:token")
        assert_eq!(header.header_value(), "Basic dXNlcm5hbWU6dG9rZW4=");
    }

    #[test]
    fn test_header_debug_hides_secret() {
        let header = AuthHeader::Basic {
            username: "octocat".to_string(),
            password: "ghp_secret".into(),
        };
        let debug = format!("{:?}", header);
        assert!(debug.contains("octocat"));
        assert!(!debug.contains("ghp_secret"));
    }
}
