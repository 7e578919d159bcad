//! Shared fixtures for the mock-server test suites.

#![allow(dead_code)]

use issue_probe::auth::BasicAuthProvider;
use issue_probe::config::GitHubConfig;
use issue_probe::github::GitHubClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const OWNER: &str = "testnakov";
pub const REPO: &str = "test-nakov-repo";
pub const USERNAME: &str = "username";
pub const TOKEN: &str = "token";

/// `Authorization` value for USERNAME:TOKEN
pub const BASIC_AUTH: &str = "Basic dXNlcm5hbWU6dG9rZW4=";

/// GitHub config pointing at the mock server
pub fn github_config(mock_server: &MockServer) -> GitHubConfig {
    GitHubConfig {
        url: mock_server.uri(),
        owner: OWNER.to_string(),
        username: USERNAME.to_string(),
        token: Some(TOKEN.into()),
        timeout_secs: 5,
        verify_ssl: true,
    }
}

pub fn create_test_client(mock_server: &MockServer) -> GitHubClient {
    let config = github_config(mock_server);
    let auth = BasicAuthProvider::new(USERNAME, TOKEN).unwrap();
    GitHubClient::new(&config, Box::new(auth)).unwrap()
}

/// Absolute request path for an endpoint below the repository
pub fn repo_path(suffix: &str) -> String {
    format!("/repos/{}/{}{}", OWNER, REPO, suffix)
}

pub fn issue_json(id: u64, number: u64, title: &str) -> Value {
    json!({
        "id": id,
        "node_id": "I_kwDO",
        "number": number,
        "title": title,
        "body": "Some body",
        "state": "open",
        "html_url": format!("https://github.com/{}/{}/issues/{}", OWNER, REPO, number),
        "user": {"login": "octocat", "id": 1}
    })
}

pub fn comment_json(id: u64, body: &str) -> Value {
    json!({
        "id": id,
        "node_id": "IC_kwDO",
        "body": body,
        "html_url": format!("https://github.com/{}/{}/issues/1#issuecomment-{}", OWNER, REPO, id),
        "user": {"login": "octocat", "id": 1}
    })
}

pub fn label_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": "LA_kwDO",
        "name": name,
        "color": "d73a4a",
        "description": null,
        "default": true
    })
}
