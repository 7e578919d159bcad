//! The fixed sequence of scenario steps

use std::fmt;

/// One step of the check scenario, declared in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    ListIssues,
    GetIssue,
    ListLabels,
    ListComments,
    CreateIssue,
    CreateComment,
    GetComment,
    EditComment,
    DeleteComment,
}

impl Step {
    /// Every step, in the order the scenario runs them
    pub const ALL: [Step; 9] = [
        Step::ListIssues,
        Step::GetIssue,
        Step::ListLabels,
        Step::ListComments,
        Step::CreateIssue,
        Step::CreateComment,
        Step::GetComment,
        Step::EditComment,
        Step::DeleteComment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::ListIssues => "list_issues",
            Step::GetIssue => "get_issue",
            Step::ListLabels => "list_labels",
            Step::ListComments => "list_comments",
            Step::CreateIssue => "create_issue",
            Step::CreateComment => "create_comment",
            Step::GetComment => "get_comment",
            Step::EditComment => "edit_comment",
            Step::DeleteComment => "delete_comment",
        }
    }

    /// 1-based position in [`Step::ALL`]
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    /// Whether the step changes state in the remote repository
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Step::CreateIssue | Step::CreateComment | Step::EditComment | Step::DeleteComment
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (index, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.ordinal(), index + 1);
        }
        assert!(Step::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = Step::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Step::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::CreateComment.to_string(), "create_comment");
    }

    #[test]
    fn test_mutating_steps() {
        let mutating: Vec<_> = Step::ALL.into_iter().filter(|s| s.is_mutating()).collect();
        assert_eq!(
            mutating,
            vec![
                Step::CreateIssue,
                Step::CreateComment,
                Step::EditComment,
                Step::DeleteComment
            ]
        );
    }
}
