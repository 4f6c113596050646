use anyhow::Result;

use super::{BuildSummary, CommandKind, CommandResult, CommandSummary};
use crate::{
    cli::args::{BuildCommand, CheckCommand, CommonArgs},
    core::{
        BuildContext, BuildError,
        emit::{OutputFile, write_outputs},
        pipeline,
    },
    issues::Issue,
};

/// Outcome of running the pipeline up to (but not including) writing.
enum Prepared {
    Ready {
        ctx: BuildContext,
        summary: BuildSummary,
        outputs: Vec<OutputFile>,
    },
    Rejected(Issue),
}

fn prepare(common: &CommonArgs, is_apply: bool) -> Result<Prepared> {
    let ctx = BuildContext::new(&common.root, common.locale.clone(), common.verbose)?;

    let bundle = match pipeline::build(&ctx) {
        Ok(bundle) => bundle,
        Err(BuildError::Rejected(issue)) => return Ok(Prepared::Rejected(issue)),
        Err(BuildError::Failed(err)) => return Err(err),
    };

    let outputs = bundle.render(&ctx.config)?;
    let summary = BuildSummary {
        category_count: bundle.categories.len(),
        field_count: bundle.fields.len(),
        preset_count: bundle.presets.len(),
        is_apply,
        outputs: Vec::new(),
    };

    Ok(Prepared::Ready {
        ctx,
        summary,
        outputs,
    })
}

/// Build and write every output file.
pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let args = &cmd.args;

    match prepare(&args.common, true)? {
        Prepared::Rejected(issue) => Ok(CommandResult::rejected(CommandKind::Build, issue)),
        Prepared::Ready {
            ctx,
            mut summary,
            outputs,
        } => {
            write_outputs(&args.out_dir, &outputs)?;
            summary.outputs = outputs
                .iter()
                .map(|output| args.out_dir.join(output.name))
                .collect();
            ctx.note(&format!(
                "Wrote {} files to {}",
                outputs.len(),
                args.out_dir.display()
            ));

            Ok(CommandResult {
                kind: CommandKind::Build,
                summary: CommandSummary::Build(summary),
                issue: None,
            })
        }
    }
}

/// Run every collection and validation pass without writing.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    match prepare(&cmd.args.common, false)? {
        Prepared::Rejected(issue) => Ok(CommandResult::rejected(CommandKind::Check, issue)),
        Prepared::Ready {
            mut summary,
            outputs,
            ..
        } => {
            summary.outputs = outputs.iter().map(|output| output.name.into()).collect();

            Ok(CommandResult {
                kind: CommandKind::Check,
                summary: CommandSummary::Build(summary),
                issue: None,
            })
        }
    }
}
