//! Output rendering and writing.
//!
//! Everything is rendered to memory first; files are only written once every
//! output has rendered successfully.

pub mod json;
pub mod taginfo;
pub mod yaml;

use std::{fs, path::Path};

use anyhow::{Context, Result};

pub const CATEGORIES_FILE: &str = "categories.json";
pub const FIELDS_FILE: &str = "fields.json";
pub const PRESETS_FILE: &str = "presets.json";
pub const TRANSLATIONS_FILE: &str = "presets.yaml";
pub const TAGINFO_FILE: &str = "taginfo.json";

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: &'static str,
    pub contents: String,
}

/// Overwrite each output under `out_dir`, creating the directory if needed.
pub fn write_outputs(out_dir: &Path, outputs: &[OutputFile]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    for output in outputs {
        let path = out_dir.join(output.name);
        fs::write(&path, &output.contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    Ok(())
}
