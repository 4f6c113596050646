//! Source file discovery and loading.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};
use serde_json::Value;
use walkdir::WalkDir;

pub const CATEGORIES_DIR: &str = "categories";
pub const FIELDS_DIR: &str = "fields";
pub const PRESETS_DIR: &str = "presets";

const JSON_EXTENSION: &str = "json";

/// List `*.json` directly inside `dir`, sorted by path.
///
/// A missing directory yields no files.
pub fn find_flat(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Path::new(&Pattern::escape(&dir.to_string_lossy())).join("*.json");
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))? {
        let path = entry.with_context(|| format!("Failed to read entry under {}", dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// List `**/*.json` under `dir`, sorted by path.
///
/// A missing directory yields no files.
pub fn find_recursive(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == JSON_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Identifier of `path` relative to `base`: extension stripped, components
/// joined with `/` on every platform.
///
/// `fields/address/street.json` under `fields` → `address/street`.
pub fn relative_id(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?.with_extension("");
    let parts: Vec<_> = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Identifier of a category file: `category-<file stem>`.
pub fn category_id(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    Some(format!("category-{}", stem))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}
