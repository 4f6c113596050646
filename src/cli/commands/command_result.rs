use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Build,
    Check,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Init(InitSummary),
    /// The run stopped on an issue.
    Rejected,
}

#[derive(Debug)]
pub struct BuildSummary {
    pub category_count: usize,
    pub field_count: usize,
    pub preset_count: usize,
    /// False for `check`, which renders outputs without writing them.
    pub is_apply: bool,
    /// Output files written (or that would be written).
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a presetpack command
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// The issue that stopped the run, if any.
    pub issue: Option<Issue>,
}

impl CommandResult {
    pub fn rejected(kind: CommandKind, issue: Issue) -> Self {
        Self {
            kind,
            summary: CommandSummary::Rejected,
            issue: Some(issue),
        }
    }
}
