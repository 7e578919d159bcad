//! Utility types shared across the application.

mod secret;

pub use secret::SecretString;

/// Percent-encode a single URL path segment (a repository name, for instance).
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
