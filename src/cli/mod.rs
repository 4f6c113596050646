use std::process::ExitCode;

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{
    Arguments, BuildArgs, BuildCommand, CheckArgs, CheckCommand, Command, CommonArgs,
};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result).into())
}
