//! Issue comment operations

use crate::error::GitHubResult;
use crate::github::client::{GitHubClient, require_non_empty, require_positive};
use crate::github::issues::{issue_path, issues_path};
use crate::github::types::{Comment, CommentBody};
use reqwest::StatusCode;
use tracing::{info, warn};

impl GitHubClient {
    /// List the comments on an issue, oldest first
    pub async fn get_all_comments_for_issue(
        &self,
        repo: &str,
        number: u64,
    ) -> GitHubResult<Vec<Comment>> {
        require_non_empty("repository name", repo)?;
        require_positive("issue number", number)?;
        self.get(&format!("{}/comments", issue_path(repo, number)))
            .await
    }

    /// Add a comment to an issue
    pub async fn create_comment(
        &self,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> GitHubResult<Comment> {
        require_non_empty("repository name", repo)?;
        require_positive("issue number", issue_number)?;
        require_non_empty("comment body", body)?;

        let comment: Comment = self
            .post(
                &format!("{}/comments", issue_path(repo, issue_number)),
                &CommentBody { body },
            )
            .await?;
        info!(repo, issue_number, comment_id = comment.id, "Created comment");
        Ok(comment)
    }

    /// Fetch a comment by its global id
    pub async fn get_comment_by_id(&self, repo: &str, id: u64) -> GitHubResult<Comment> {
        require_non_empty("repository name", repo)?;
        require_positive("comment id", id)?;
        self.get(&comment_path(repo, id)).await
    }

    /// Replace the body of a comment
    pub async fn edit_comment(&self, repo: &str, id: u64, body: &str) -> GitHubResult<Comment> {
        require_non_empty("repository name", repo)?;
        require_positive("comment id", id)?;
        require_non_empty("comment body", body)?;

        self.patch(&comment_path(repo, id), &CommentBody { body })
            .await
    }

    /// Delete a comment.
    ///
    /// Returns `true` only for `204 No Content`; any other success status is
    /// reported as `false`. Missing comments surface as `NotFound`.
    pub async fn delete_comment(&self, repo: &str, id: u64) -> GitHubResult<bool> {
        require_non_empty("repository name", repo)?;
        require_positive("comment id", id)?;

        let status = self.delete(&comment_path(repo, id)).await?;
        if status != StatusCode::NO_CONTENT {
            warn!(comment_id = id, status = status.as_u16(), "Unexpected delete status");
            return Ok(false);
        }
        Ok(true)
    }
}

fn comment_path(repo: &str, id: u64) -> String {
    format!("{}/comments/{}", issues_path(repo), id)
}
