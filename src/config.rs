use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".presetpackrc.json";

static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]+)*$").expect("locale pattern is valid")
});

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_field_schema")]
    pub field_schema: String,
    #[serde(default = "default_preset_schema")]
    pub preset_schema: String,
    #[serde(default)]
    pub taginfo: TaginfoProject,
}

/// Project metadata published in the `taginfo.json` header.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaginfoProject {
    #[serde(default = "default_data_url")]
    pub data_url: String,
    #[serde(default = "default_project_name")]
    pub name: String,
    #[serde(default = "default_project_description")]
    pub description: String,
    #[serde(default = "default_project_url")]
    pub project_url: String,
    #[serde(default = "default_doc_url")]
    pub doc_url: String,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_field_schema() -> String {
    "schema/field.json".to_string()
}

fn default_preset_schema() -> String {
    "schema/preset.json".to_string()
}

fn default_data_url() -> String {
    "https://raw.githubusercontent.com/osmlab/editor-presets/master/taginfo.json".to_string()
}

fn default_project_name() -> String {
    "Editor Presets".to_string()
}

fn default_project_description() -> String {
    "Common OpenStreetMap editor presets.".to_string()
}

fn default_project_url() -> String {
    "https://github.com/osmlab/editor-presets".to_string()
}

fn default_doc_url() -> String {
    "https://github.com/osmlab/editor-presets/blob/master/README.md".to_string()
}

fn default_keywords() -> Vec<String> {
    vec!["editor".to_string()]
}

impl Default for TaginfoProject {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            name: default_project_name(),
            description: default_project_description(),
            project_url: default_project_url(),
            doc_url: default_doc_url(),
            keywords: default_keywords(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            field_schema: default_field_schema(),
            preset_schema: default_preset_schema(),
            taginfo: TaginfoProject::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The locale becomes the top-level key of `presets.yaml`, so it must look
    /// like a language tag (`en`, `pt-BR`, `zh_Hant`).
    pub fn validate(&self) -> Result<()> {
        if !is_valid_locale(&self.locale) {
            bail!("Invalid locale in 'locale': \"{}\"", self.locale);
        }
        if self.field_schema.trim().is_empty() {
            bail!("'fieldSchema' must not be empty");
        }
        if self.preset_schema.trim().is_empty() {
            bail!("'presetSchema' must not be empty");
        }
        Ok(())
    }
}

pub fn is_valid_locale(locale: &str) -> bool {
    LOCALE_PATTERN.is_match(locale)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
