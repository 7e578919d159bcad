//! Per-step outcomes of a scenario run

use crate::error::ScenarioError;
use crate::github::{Comment, Issue, Label};
use crate::scenario::Step;
use std::fmt;
use std::time::Duration;

/// Short human-readable description of a step's result
pub trait Summary {
    fn summary(&self) -> String;
}

impl Summary for Vec<Issue> {
    fn summary(&self) -> String {
        format!("{} issues", self.len())
    }
}

impl Summary for Issue {
    fn summary(&self) -> String {
        format!("issue #{} (id {})", self.number, self.id)
    }
}

impl Summary for Vec<Label> {
    fn summary(&self) -> String {
        let names: Vec<&str> = self.iter().map(|l| l.name.as_str()).collect();
        format!("{} labels: {}", self.len(), names.join(", "))
    }
}

impl Summary for Vec<Comment> {
    fn summary(&self) -> String {
        format!("{} comments", self.len())
    }
}

impl Summary for Comment {
    fn summary(&self) -> String {
        format!("comment {}", self.id)
    }
}

impl Summary for bool {
    fn summary(&self) -> String {
        let text = if *self { "deleted" } else { "not deleted" };
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Passed => f.pad("passed"),
            StepStatus::Failed => f.pad("failed"),
        }
    }
}

/// What happened when a single step ran
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: Step,
    pub status: StepStatus,
    pub elapsed: Duration,
    pub detail: String,
}

/// Outcome of a whole scenario run
///
/// Holds one [`StepReport`] per executed step. Steps after a failure never
/// run and show up as skipped when the report is rendered.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub steps: Vec<StepReport>,
    /// Number of the issue opened by the create step, if it got that far
    pub created_issue: Option<u64>,
    /// Set once teardown closed the created issue
    pub closed_issue: Option<u64>,
    pub failure: Option<ScenarioError>,
}

impl ScenarioReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn passed(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Passed)
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = Step> + '_ {
        Step::ALL.into_iter().skip(self.steps.len())
    }

    pub fn total_elapsed(&self) -> Duration {
        self.steps.iter().map(|s| s.elapsed).sum()
    }

    /// Split off the failure, if any
    pub fn into_result(mut self) -> Result<ScenarioReport, ScenarioError> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    pub(crate) fn push(&mut self, step: Step, status: StepStatus, elapsed: Duration, detail: String) {
        debug_assert_eq!(
            Step::ALL.get(self.steps.len()),
            Some(&step),
            "steps must be recorded in declaration order"
        );
        self.steps.push(StepReport {
            step,
            status,
            elapsed,
            detail,
        });
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.steps {
            writeln!(
                f,
                "{}. {:<15} {:<7} {}",
                report.step.ordinal(),
                report.step.name(),
                report.status,
                report.detail
            )?;
        }

        let mut skipped = 0;
        for step in self.skipped() {
            writeln!(f, "{}. {:<15} skipped", step.ordinal(), step.name())?;
            skipped += 1;
        }

        if let Some(number) = self.closed_issue {
            writeln!(f, "teardown: closed issue #{}", number)?;
        }

        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.steps.len() - self.passed(),
            skipped
        )
    }
}
