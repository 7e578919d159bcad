//! Configuration loading tests

use issue_probe::config::{LogFormat, load_config, load_config_from_str};
use issue_probe::error::ConfigError;
use std::env;
use std::fs;
use tempfile::tempdir;

const MINIMAL_CONFIG: &str = r#"
[github]
username = "octocat"
token = "test-token"
"#;

const FULL_CONFIG: &str = r#"
[github]
url = "https://github.example.com/api/v3"
owner = "acme"
username = "probe-bot"
token = "ghp_test"
timeout_secs = 60
verify_ssl = false

[scenario]
repo = "widgets"
issue_number = 3
labelled_issue_number = 8
issue_title = "Probe issue"
issue_body = "Opened by the probe"
comment_body = "first"
edited_comment_body = "second"
close_created_issue = true

[logging]
level = "debug"
format = "json"
"#;

/// Every variable the loader reads besides the config file
const LOADER_ENV_VARS: &[&str] = &[
    "ISSUE_PROBE__GITHUB__TOKEN",
    "ISSUE_PROBE__GITHUB__USERNAME",
    "ISSUE_PROBE__GITHUB__URL",
    "ISSUE_PROBE__SCENARIO__REPO",
    "ISSUE_PROBE__SCENARIO__ISSUE_NUMBER",
    "GITHUB_TOKEN",
    "GH_TOKEN",
    "GITHUB_USER",
    "GITHUB_API_URL",
];

fn clear_env() {
    for var in LOADER_ENV_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_minimal_config() {
    let config = load_config_from_str(MINIMAL_CONFIG).unwrap();

    assert_eq!(config.github.url, "https://api.github.com");
    assert_eq!(config.github.owner, "testnakov");
    assert_eq!(config.github.username, "octocat");
    assert_eq!(
        config.github.token.as_ref().map(|t| t.expose_secret()),
        Some("test-token")
    );
    assert_eq!(config.scenario.repo, "test-nakov-repo");
}

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    // GitHub
    assert_eq!(config.github.url, "https://github.example.com/api/v3");
    assert_eq!(config.github.owner, "acme");
    assert_eq!(config.github.username, "probe-bot");
    assert_eq!(config.github.timeout_secs, 60);
    assert!(!config.github.verify_ssl);
    assert_eq!(
        config.github.repos_url(),
        "https://github.example.com/api/v3/repos/acme"
    );

    // Scenario
    assert_eq!(config.scenario.repo, "widgets");
    assert_eq!(config.scenario.issue_number, 3);
    assert_eq!(config.scenario.labelled_issue_number, 8);
    assert_eq!(config.scenario.issue_title, "Probe issue");
    assert_eq!(config.scenario.issue_body, "Opened by the probe");
    assert_eq!(config.scenario.comment_body, "first");
    assert_eq!(config.scenario.edited_comment_body, "second");
    assert!(config.scenario.close_created_issue);

    // Logging
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_defaults() {
    let config = load_config_from_str("").unwrap();

    assert_eq!(config.github.timeout_secs, 30);
    assert!(config.github.verify_ssl);
    assert!(config.github.token.is_none());
    assert_eq!(config.scenario.issue_number, 1);
    assert_eq!(config.scenario.labelled_issue_number, 6);
    assert_eq!(config.scenario.issue_title, "Create Your Own Title");
    assert_eq!(config.scenario.issue_body, "Give Some Description");
    assert_eq!(config.scenario.comment_body, "Let me see");
    assert_eq!(
        config.scenario.edited_comment_body,
        "Updated text on the comment."
    );
    assert!(!config.scenario.close_created_issue);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_token_is_redacted_in_debug_output() {
    let config = load_config_from_str(MINIMAL_CONFIG).unwrap();
    let rendered = format!("{:?}", config.github);

    assert!(!rendered.contains("test-token"));
    assert!(rendered.contains("[REDACTED]"));
}

#[test]
fn test_unknown_log_format_rejected() {
    let config_str = r#"
[logging]
format = "xml"
"#;

    assert!(matches!(
        load_config_from_str(config_str),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn test_empty_owner_rejected() {
    let config_str = r#"
[github]
owner = "  "
"#;

    match load_config_from_str(config_str) {
        Err(ConfigError::Missing { field }) => assert_eq!(field, "github.owner"),
        other => panic!("expected missing github.owner, got {other:?}"),
    }
}

#[test]
#[serial_test::serial]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("absent.toml");

    let result = load_config(Some(config_path.to_str().unwrap()));
    match result {
        Err(ConfigError::Load(message)) => assert!(message.contains("not found")),
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
#[serial_test::serial]
fn test_load_config_requires_token() {
    clear_env();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("test-config.toml");
    fs::write(&config_path, "[github]\nusername = \"octocat\"\n").unwrap();

    let result = load_config(Some(config_path.to_str().unwrap()));
    assert!(matches!(result, Err(ConfigError::Missing { .. })));
}

#[test]
#[serial_test::serial]
fn test_env_var_priority_prefixed_over_github_token() {
    clear_env();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("test-config.toml");
    fs::write(&config_path, "[github]\nusername = \"octocat\"\n").unwrap();

    unsafe {
        env::set_var("ISSUE_PROBE__GITHUB__TOKEN", "prefixed-token");
        env::set_var("GITHUB_TOKEN", "github-fallback-token");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

    assert_eq!(
        config.github.token.as_ref().map(|t| t.expose_secret()),
        Some("prefixed-token")
    );

    clear_env();
}

#[test]
#[serial_test::serial]
fn test_env_var_github_token_fallback() {
    clear_env();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("test-config.toml");
    fs::write(&config_path, "[github]\nusername = \"octocat\"\n").unwrap();

    unsafe {
        env::set_var("GH_TOKEN", "gh-cli-token");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

    assert_eq!(
        config.github.token.as_ref().map(|t| t.expose_secret()),
        Some("gh-cli-token")
    );

    clear_env();
}

#[test]
#[serial_test::serial]
fn test_env_var_fallbacks_override_file() {
    clear_env();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("test-config.toml");
    let config_content = r#"
[github]
url = "https://file.example.com"
username = "from-file"
token = "file-token"
"#;
    fs::write(&config_path, config_content).unwrap();

    unsafe {
        env::set_var("GITHUB_USER", "from-env");
        env::set_var("GITHUB_API_URL", "https://env.example.com/api/v3");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

    assert_eq!(config.github.username, "from-env");
    assert_eq!(config.github.url, "https://env.example.com/api/v3");
    assert_eq!(
        config.github.token.as_ref().map(|t| t.expose_secret()),
        Some("file-token")
    );

    clear_env();
}

#[test]
#[serial_test::serial]
fn test_env_var_scenario_overrides() {
    clear_env();

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("test-config.toml");
    fs::write(&config_path, MINIMAL_CONFIG).unwrap();

    unsafe {
        env::set_var("ISSUE_PROBE__SCENARIO__REPO", "sandbox");
        env::set_var("ISSUE_PROBE__SCENARIO__ISSUE_NUMBER", "12");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

    assert_eq!(config.scenario.repo, "sandbox");
    assert_eq!(config.scenario.issue_number, 12);

    clear_env();
}
