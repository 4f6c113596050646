//! presetpack - bundle map-feature presets for editors
//!
//! presetpack reads a tree of per-item JSON files (categories, fields and
//! presets), validates them against JSON schemas and against each other, and
//! writes the consolidated bundle files together with a translation source
//! (`presets.yaml`) and a taginfo project file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Build pipeline (collect, validate, synthesize, render)
//! - `issues`: Validation issue types

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
