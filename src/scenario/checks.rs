//! Assertions applied to API responses

use crate::error::{StepError, StepResult};
use crate::github::{Comment, Issue, Label};

/// Fail the current step with an assertion message unless `cond` holds
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::StepError::Assertion(format!($($arg)+)));
        }
    };
}

pub(crate) use ensure;

/// Every listed issue carries an id, a number and a title
pub(crate) fn check_issue(issue: &Issue) -> StepResult<()> {
    ensure!(issue.id > 0, "issue id should be greater than 0");
    ensure!(
        issue.number > 0,
        "issue number should be greater than 0 (id {})",
        issue.id
    );
    ensure!(
        !issue.title.is_empty(),
        "issue #{} title should not be empty",
        issue.number
    );
    Ok(())
}

pub(crate) fn check_label(label: &Label) -> StepResult<()> {
    ensure!(label.id > 0, "label id should be greater than 0");
    ensure!(
        !label.name.is_empty(),
        "label {} name should not be empty",
        label.id
    );
    Ok(())
}

pub(crate) fn check_comment(comment: &Comment) -> StepResult<()> {
    ensure!(comment.id > 0, "comment id should be greater than 0");
    ensure!(
        !comment.body.is_empty(),
        "comment {} body should not be empty",
        comment.id
    );
    Ok(())
}

/// Compare a returned value with the one the step sent or expects
pub(crate) fn check_eq<T>(what: &str, actual: T, expected: T) -> StepResult<()>
where
    T: PartialEq + std::fmt::Debug,
{
    if actual != expected {
        return Err(StepError::Assertion(format!(
            "{what}: expected {expected:?}, got {actual:?}"
        )));
    }
    Ok(())
}
