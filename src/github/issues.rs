//! Issue and label operations

use crate::error::GitHubResult;
use crate::github::client::{GitHubClient, require_non_empty, require_positive};
use crate::github::types::{Issue, IssueUpdate, Label, NewIssue};
use crate::util::encode_segment;
use tracing::info;

impl GitHubClient {
    /// List the issues of a repository in the order GitHub returns them
    pub async fn get_all_issues(&self, repo: &str) -> GitHubResult<Vec<Issue>> {
        require_non_empty("repository name", repo)?;
        self.get(&issues_path(repo)).await
    }

    /// Fetch a single issue by its repository-local number
    pub async fn get_issue_by_number(&self, repo: &str, number: u64) -> GitHubResult<Issue> {
        require_non_empty("repository name", repo)?;
        require_positive("issue number", number)?;
        self.get(&issue_path(repo, number)).await
    }

    /// List the labels attached to an issue
    pub async fn get_all_labels_for_issue(
        &self,
        repo: &str,
        number: u64,
    ) -> GitHubResult<Vec<Label>> {
        require_non_empty("repository name", repo)?;
        require_positive("issue number", number)?;
        self.get(&format!("{}/labels", issue_path(repo, number)))
            .await
    }

    /// Open a new issue; GitHub assigns its id and number
    pub async fn create_issue(&self, repo: &str, title: &str, body: &str) -> GitHubResult<Issue> {
        require_non_empty("repository name", repo)?;
        require_non_empty("issue title", title)?;

        let issue: Issue = self
            .post(&issues_path(repo), &NewIssue { title, body })
            .await?;
        info!(repo, issue_number = issue.number, issue_id = issue.id, "Created issue");
        Ok(issue)
    }

    /// Close an issue. GitHub's REST API has no issue deletion.
    pub async fn close_issue(&self, repo: &str, number: u64) -> GitHubResult<Issue> {
        require_non_empty("repository name", repo)?;
        require_positive("issue number", number)?;

        let issue: Issue = self
            .patch(&issue_path(repo, number), &IssueUpdate { state: "closed" })
            .await?;
        info!(repo, issue_number = issue.number, "Closed issue");
        Ok(issue)
    }
}

pub(crate) fn issues_path(repo: &str) -> String {
    format!("/{}/issues", encode_segment(repo))
}

pub(crate) fn issue_path(repo: &str, number: u64) -> String {
    format!("{}/{}", issues_path(repo), number)
}
