use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;

use crate::config::{Config, is_valid_locale, load_config};

/// Configuration and paths for one build.
pub struct BuildContext {
    pub config: Config,
    pub root: PathBuf,
    pub verbose: bool,
}

impl BuildContext {
    /// Load the config file found from `root` and apply command-line overrides.
    pub fn new(root: &Path, locale: Option<String>, verbose: bool) -> Result<Self> {
        if !root.is_dir() {
            bail!("Root directory does not exist: {}", root.display());
        }

        let loaded = load_config(root)?;
        if verbose {
            match &loaded.source {
                Some(path) => note(&format!("Using config {}", path.display())),
                None => note("No .presetpackrc.json found, using default configuration"),
            }
        }

        let mut config = loaded.config;
        if let Some(locale) = locale {
            if !is_valid_locale(&locale) {
                bail!("Invalid locale: \"{}\"", locale);
            }
            config.locale = locale;
        }

        Ok(Self {
            config,
            root: root.to_path_buf(),
            verbose,
        })
    }

    /// Build straight from a config, without looking for a config file.
    pub fn with_config(root: &Path, config: Config) -> Self {
        Self {
            config,
            root: root.to_path_buf(),
            verbose: false,
        }
    }

    pub fn field_schema_path(&self) -> PathBuf {
        self.root.join(&self.config.field_schema)
    }

    pub fn preset_schema_path(&self) -> PathBuf {
        self.root.join(&self.config.preset_schema)
    }

    /// Print a progress note when running verbosely.
    pub fn note(&self, message: &str) {
        if self.verbose {
            note(message);
        }
    }
}

fn note(message: &str) {
    eprintln!("{} {}", "note:".bold().cyan(), message);
}
