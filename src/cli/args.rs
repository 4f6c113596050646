//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Collect, validate and write all bundle files (default)
//! - `check`: Collect and validate without writing anything
//! - `init`: Create a `.presetpackrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; a bare invocation builds with default arguments.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Build(BuildCommand::default()))
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `build` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing categories/, fields/, presets/ and schema/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Locale code wrapping presets.yaml (overrides config file)
    #[arg(long, env = "PRESETPACK_LOCALE")]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            locale: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the output files are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            common: CommonArgs::default(),
            out_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build categories.json, fields.json, presets.json, presets.yaml and taginfo.json
    Build(BuildCommand),
    /// Validate the preset tree without writing any output
    Check(CheckCommand),
    /// Initialize a new .presetpackrc.json configuration file
    Init,
}
