use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into the working directory.
///
/// An existing file is left untouched and reported as not created.
pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let created = !config_path.exists();

    if created {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    Ok(CommandResult {
        kind: CommandKind::Init,
        summary: CommandSummary::Init(InitSummary { created }),
        issue: None,
    })
}
