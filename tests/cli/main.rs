use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod build;
mod init;

const BIN_NAME: &str = "presetpack";

pub const FIELD_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "type": "object",
    "properties": {
        "key": { "type": "string" },
        "keys": { "type": "array", "items": { "type": "string" } },
        "type": { "type": "string", "enum": ["text", "combo", "check", "access"] },
        "label": { "type": "string" },
        "placeholder": { "type": "string" },
        "strings": { "type": "object" }
    },
    "required": ["type", "label"]
}"#;

pub const PRESET_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "type": "object",
    "properties": {
        "name": { "type": "string" },
        "tags": { "type": "object", "additionalProperties": { "type": "string" } },
        "terms": { "type": "array", "items": { "type": "string" } },
        "fields": { "type": "array", "items": { "type": "string" } },
        "geometry": { "type": "array", "items": { "type": "string" } }
    },
    "required": ["name", "tags"]
}"#;

pub const OUTPUT_FILES: &[&str] = &[
    "categories.json",
    "fields.json",
    "presets.json",
    "presets.yaml",
    "taginfo.json",
];

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keeps config discovery inside the project
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with schemas and a small valid preset tree.
    pub fn with_preset_tree() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("schema/field.json", FIELD_SCHEMA)?;
        test.write_file("schema/preset.json", PRESET_SCHEMA)?;
        test.write_file(
            "categories/food.json",
            r#"{ "name": "Food", "icon": "restaurant", "members": ["amenity/cafe", "shop"] }"#,
        )?;
        test.write_file(
            "fields/cuisine.json",
            r#"{
                "key": "cuisine",
                "type": "combo",
                "label": "Cuisine",
                "placeholder": "Pizza, Sushi...",
                "strings": { "options": { "pizza": "Pizza" } }
            }"#,
        )?;
        test.write_file(
            "fields/address/street.json",
            r#"{ "key": "addr:street", "type": "text", "label": "Street", "strings": { "a": "b" } }"#,
        )?;
        test.write_file(
            "presets/amenity/cafe.json",
            r#"{
                "name": "Coffee Shop",
                "tags": { "amenity": "cafe", "cuisine": "coffee_shop" },
                "terms": ["cafe", "espresso"],
                "fields": ["cuisine", "address/street"]
            }"#,
        )?;
        test.write_file(
            "presets/shop.json",
            r#"{ "name": "Shop", "tags": { "shop": "*" }, "geometry": ["point"] }"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn build_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("build");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

pub fn run(mut cmd: Command) -> Result<Output> {
    cmd.output().context("Failed to run presetpack")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
