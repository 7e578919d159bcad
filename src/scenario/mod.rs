//! Ordered check scenario against a live repository
//!
//! The scenario is a fixed pipeline of nine steps (see [`Step::ALL`]). Each
//! step builds a fresh client, performs exactly one API call and asserts on
//! the response. Identifiers produced by the create steps are handed to the
//! later steps as plain arguments, so a step that depends on a created issue
//! or comment cannot run unless the step producing it succeeded. The first
//! failure ends the run.
//!
//! ```text
//! list_issues → get_issue → list_labels → list_comments
//!   → create_issue ──number──▶ create_comment ──id──▶ get_comment
//!                                                    → edit_comment
//!                                                    → delete_comment
//! ```

mod checks;
pub mod report;
pub mod step;

pub use report::{ScenarioReport, StepReport, StepStatus, Summary};
pub use step::Step;

use crate::auth::create_auth_provider;
use crate::config::{GitHubConfig, ScenarioConfig};
use crate::error::{ScenarioError, StepResult};
use crate::github::{Comment, GitHubClient, Issue, Label};
use checks::{check_comment, check_eq, check_issue, check_label, ensure};
use std::future::Future;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// The check scenario, bound to one repository and one set of inputs
pub struct Scenario {
    github: GitHubConfig,
    config: ScenarioConfig,
}

impl Scenario {
    pub fn new(github: GitHubConfig, config: ScenarioConfig) -> Self {
        Self { github, config }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// Consumes the scenario: a run mutates the remote repository and is not
    /// meant to be repeated with the same inputs.
    #[instrument(skip(self), fields(repo = %self.config.repo))]
    pub async fn run(self) -> ScenarioReport {
        let mut report = ScenarioReport::default();

        if let Err(err) = self.run_steps(&mut report).await {
            report.failure = Some(err);
        }

        if self.config.close_created_issue
            && let Some(number) = report.created_issue
        {
            report.closed_issue = self.teardown(number).await;
        }

        info!(
            passed = report.passed(),
            total = Step::ALL.len(),
            elapsed_ms = report.total_elapsed().as_millis() as u64,
            success = report.is_success(),
            "Scenario finished"
        );
        report
    }

    async fn run_steps(&self, report: &mut ScenarioReport) -> Result<(), ScenarioError> {
        record(report, Step::ListIssues, self.list_issues()).await?;
        record(report, Step::GetIssue, self.get_issue()).await?;
        record(report, Step::ListLabels, self.list_labels()).await?;
        record(report, Step::ListComments, self.list_comments()).await?;

        // the issue exists as soon as GitHub answered, even if its checks fail
        let mut created = None;
        let issue = record(report, Step::CreateIssue, self.create_issue(&mut created)).await;
        report.created_issue = created;
        let issue = issue?;

        let comment = record(
            report,
            Step::CreateComment,
            self.create_comment(issue.number),
        )
        .await?;

        record(report, Step::GetComment, self.get_comment(comment.id)).await?;
        record(report, Step::EditComment, self.edit_comment(comment.id)).await?;
        record(report, Step::DeleteComment, self.delete_comment(comment.id)).await?;

        Ok(())
    }

    /// A new client (and authenticator) for every step
    fn connect(&self) -> StepResult<GitHubClient> {
        let auth = create_auth_provider(&self.github)?;
        Ok(GitHubClient::new(&self.github, auth)?)
    }

    fn repo(&self) -> &str {
        &self.config.repo
    }

    async fn list_issues(&self) -> StepResult<Vec<Issue>> {
        let issues = self.connect()?.get_all_issues(self.repo()).await?;

        ensure!(
            issues.len() > 1,
            "there should be more than one issue, got {}",
            issues.len()
        );
        for issue in &issues {
            check_issue(issue)?;
        }
        Ok(issues)
    }

    async fn get_issue(&self) -> StepResult<Issue> {
        let number = self.config.issue_number;
        let issue = self
            .connect()?
            .get_issue_by_number(self.repo(), number)
            .await?;

        ensure!(issue.id > 0, "issue id should be greater than 0");
        check_eq("issue number", issue.number, number)?;
        Ok(issue)
    }

    async fn list_labels(&self) -> StepResult<Vec<Label>> {
        let number = self.config.labelled_issue_number;
        let labels = self
            .connect()?
            .get_all_labels_for_issue(self.repo(), number)
            .await?;

        ensure!(!labels.is_empty(), "issue #{} should have labels", number);
        for label in &labels {
            check_label(label)?;
            info!(label_id = label.id, name = %label.name, "Label");
        }
        Ok(labels)
    }

    async fn list_comments(&self) -> StepResult<Vec<Comment>> {
        let number = self.config.labelled_issue_number;
        let comments = self
            .connect()?
            .get_all_comments_for_issue(self.repo(), number)
            .await?;

        ensure!(
            !comments.is_empty(),
            "issue #{} should have comments",
            number
        );
        for comment in &comments {
            check_comment(comment)?;
            info!(comment_id = comment.id, body = %comment.body, "Comment");
        }
        Ok(comments)
    }

    async fn create_issue(&self, created: &mut Option<u64>) -> StepResult<Issue> {
        let title = &self.config.issue_title;
        let issue = self
            .connect()?
            .create_issue(self.repo(), title, &self.config.issue_body)
            .await?;
        if issue.number > 0 {
            *created = Some(issue.number);
        }

        check_issue(&issue)?;
        check_eq("issue title", issue.title.as_str(), title.as_str())?;
        Ok(issue)
    }

    async fn create_comment(&self, issue_number: u64) -> StepResult<Comment> {
        let body = &self.config.comment_body;
        let comment = self
            .connect()?
            .create_comment(self.repo(), issue_number, body)
            .await?;

        ensure!(comment.id > 0, "comment id should be greater than 0");
        check_eq("comment body", comment.body.as_str(), body.as_str())?;
        Ok(comment)
    }

    async fn get_comment(&self, id: u64) -> StepResult<Comment> {
        let comment = self.connect()?.get_comment_by_id(self.repo(), id).await?;

        check_eq("comment id", comment.id, id)?;
        check_eq(
            "comment body",
            comment.body.as_str(),
            self.config.comment_body.as_str(),
        )?;
        Ok(comment)
    }

    async fn edit_comment(&self, id: u64) -> StepResult<Comment> {
        let body = &self.config.edited_comment_body;
        let comment = self
            .connect()?
            .edit_comment(self.repo(), id, body)
            .await?;

        check_eq("comment id", comment.id, id)?;
        check_eq("comment body", comment.body.as_str(), body.as_str())?;
        Ok(comment)
    }

    async fn delete_comment(&self, id: u64) -> StepResult<bool> {
        let deleted = self.connect()?.delete_comment(self.repo(), id).await?;

        ensure!(deleted, "comment {} should have been deleted", id);
        Ok(deleted)
    }

    /// Close the issue the scenario opened; failures are only logged
    async fn teardown(&self, number: u64) -> Option<u64> {
        let client = match self.connect() {
            Ok(client) => client,
            Err(e) => {
                warn!(issue_number = number, error = %e, "Teardown skipped");
                return None;
            }
        };

        match client.close_issue(self.repo(), number).await {
            Ok(issue) => Some(issue.number),
            Err(e) => {
                warn!(issue_number = number, error = %e, "Failed to close created issue");
                None
            }
        }
    }
}

/// Await one step and append its outcome to the report
async fn record<T, F>(report: &mut ScenarioReport, step: Step, fut: F) -> Result<T, ScenarioError>
where
    T: Summary,
    F: Future<Output = StepResult<T>>,
{
    let started = Instant::now();
    let outcome = fut.await;
    let elapsed = started.elapsed();

    match outcome {
        Ok(value) => {
            let detail = value.summary();
            info!(
                step = %step,
                ordinal = step.ordinal(),
                mutating = step.is_mutating(),
                elapsed_ms = elapsed.as_millis() as u64,
                "{}",
                detail
            );
            report.push(step, StepStatus::Passed, elapsed, detail);
            Ok(value)
        }
        Err(e) => {
            error!(step = %step, ordinal = step.ordinal(), error = %e, "Step failed");
            report.push(step, StepStatus::Failed, elapsed, e.to_string());
            Err(ScenarioError::new(step, e))
        }
    }
}
