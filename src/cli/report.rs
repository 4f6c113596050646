//! Report formatting and printing utilities.
//!
//! Issues go to stderr, success summaries to stdout. Separate from core logic
//! so the pipeline can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{BuildSummary, CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::Issue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command.
pub fn print(result: &CommandResult, verbose: bool) {
    if let Some(issue) = &result.issue {
        let mut stderr = io::stderr().lock();
        report_issue_to(issue, &mut stderr);
        print_failure_to(result.kind, &mut stderr);
        return;
    }

    match &result.summary {
        CommandSummary::Build(summary) => {
            print_build_summary_to(summary, verbose, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) if summary.created => {
            print_init_to(summary, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stderr().lock()),
        CommandSummary::Rejected => {}
    }
}

/// Print an issue to a custom writer.
///
/// ```text
/// error[unknown-preset]: Unknown preset: shop/bakery in category Shops
/// error[schema-violation]: presets/cafe.json:
///   instance.tags "x" is not of type "object"
/// ```
pub fn report_issue_to<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}{}: {}",
        "error".bold().red(),
        format!("[{}]", issue.rule()).dimmed(),
        issue.message()
    );
    for violation in issue.details() {
        let _ = writeln!(writer, "  {}", violation);
    }
}

fn print_failure_to<W: Write>(kind: CommandKind, writer: &mut W) {
    let what = match kind {
        CommandKind::Build => "Build stopped, no files were written",
        CommandKind::Check => "Check failed",
        CommandKind::Init => "Init failed",
    };
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), what.red());
}

/// Print a build or check summary to a custom writer.
pub fn print_build_summary_to<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    let counts = format!(
        "{}, {}, {}",
        plural(summary.category_count, "category", "categories"),
        plural(summary.field_count, "field", "fields"),
        plural(summary.preset_count, "preset", "presets"),
    );

    let msg = if summary.is_apply {
        format!(
            "Built {} - wrote {}",
            counts,
            plural(summary.outputs.len(), "file", "files")
        )
    } else {
        format!("Checked {} - no issues found", counts)
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());

    if verbose {
        for output in &summary.outputs {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), output.display());
        }
    }
}

/// Print the outcome of `init` to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{}: {} already exists",
            "error".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
