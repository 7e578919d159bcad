//! issue-probe
//!
//! Runs the ordered GitHub Issues check scenario against a live repository.

use clap::Parser;
use issue_probe::{
    config::{LogFormat, load_config},
    scenario::Scenario,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Check a GitHub repository's issues API end to end
#[derive(Parser, Debug)]
#[command(name = "issue-probe")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "ISSUE_PROBE_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ISSUE_PROBE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Repository to run against (overrides scenario.repo)
    #[arg(long)]
    repo: Option<String>,

    /// Close the issue the scenario creates once it finishes
    #[arg(long)]
    close_created_issue: bool,
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let mut config = load_config(args.config.as_deref())?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(&level, config.logging.format);

    if let Some(repo) = args.repo {
        config.scenario.repo = repo;
    }
    if args.close_created_issue {
        config.scenario.close_created_issue = true;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.github.repos_url(),
        repo = %config.scenario.repo,
        "Starting issue scenario"
    );

    let report = Scenario::new(config.github, config.scenario).run().await;
    println!("{report}");

    match report.into_result() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(error = %e, "Scenario failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
