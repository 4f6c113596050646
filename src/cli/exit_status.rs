use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status of a presetpack run.
///
/// - `Success` (0): outputs built (or the tree checked) without issues
/// - `Failure` (1): the input tree is invalid (schema, references, strings)
/// - `Error` (2): the run could not complete (unreadable or malformed input,
///   broken schema, bad configuration, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.issue.is_some() {
            return ExitStatus::Failure;
        }
        match &result.summary {
            CommandSummary::Init(init) if !init.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
