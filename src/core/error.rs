use std::fmt;

use crate::issues::{Issue, SchemaViolationIssue, StringCollisionIssue};

/// Why a build stopped.
///
/// `Rejected` means the input tree is invalid and the user must fix it;
/// `Failed` covers everything else (I/O, malformed JSON, broken schemas).
#[derive(Debug)]
pub enum BuildError {
    Rejected(Issue),
    Failed(anyhow::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Rejected(issue) => write!(f, "{}", issue),
            BuildError::Failed(err) => write!(f, "{:#}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<anyhow::Error> for BuildError {
    fn from(err: anyhow::Error) -> Self {
        BuildError::Failed(err)
    }
}

impl From<Issue> for BuildError {
    fn from(issue: Issue) -> Self {
        BuildError::Rejected(issue)
    }
}

impl From<SchemaViolationIssue> for BuildError {
    fn from(issue: SchemaViolationIssue) -> Self {
        BuildError::Rejected(issue.into())
    }
}

impl From<StringCollisionIssue> for BuildError {
    fn from(issue: StringCollisionIssue) -> Self {
        BuildError::Rejected(issue.into())
    }
}
