//! GitHub API module
//!
//! Provides a typed client for the issues, labels and comments endpoints of
//! the GitHub REST API.

pub mod client;
pub mod comments;
pub mod issues;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
