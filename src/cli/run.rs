use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        build::{build, check},
        init::init,
    },
};

/// Dispatch to the command handler; no subcommand means `build`.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was built, or the issue that stopped it
/// - `Err` if the command could not run (config, I/O, malformed input)
pub fn run(args: Arguments) -> Result<CommandResult> {
    match args.command_or_default() {
        Command::Build(cmd) => build(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Init => init(),
    }
}
