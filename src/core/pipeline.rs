//! The build pipeline: collect → validate → synthesize → render.
//!
//! [`build`] is a pure function of the input tree; it returns either a
//! [`Bundle`] or the reason the build stopped. Nothing is written to disk here.

use anyhow::Result;
use serde_json::{Map, Value};

use super::{
    collect::{collect_categories, collect_fields, collect_presets},
    context::BuildContext,
    emit::{
        CATEGORIES_FILE, FIELDS_FILE, OutputFile, PRESETS_FILE, TAGINFO_FILE, TRANSLATIONS_FILE,
        json::to_pretty_json, taginfo::build_taginfo, yaml::to_translation_yaml,
    },
    error::BuildError,
    model::{CategoryDef, Collection, FieldDef, PresetDef},
    references::validate_references,
    schema::SchemaValidator,
    source::{CATEGORIES_DIR, FIELDS_DIR, PRESETS_DIR},
    translate::synthesize,
};
use crate::config::Config;

/// Everything collected and derived from one input tree.
pub struct Bundle {
    pub categories: Collection<CategoryDef>,
    pub fields: Collection<FieldDef>,
    pub presets: Collection<PresetDef>,
    /// Translation source document `{categories, fields, presets}`.
    pub translations: Map<String, Value>,
}

pub fn build(ctx: &BuildContext) -> Result<Bundle, BuildError> {
    let field_schema = SchemaValidator::load(&ctx.field_schema_path())?;
    let preset_schema = SchemaValidator::load(&ctx.preset_schema_path())?;

    let categories = collect_categories(&ctx.root.join(CATEGORIES_DIR))?;
    ctx.note(&format!("Collected {} categories", categories.len()));

    let fields = collect_fields(&ctx.root.join(FIELDS_DIR), &field_schema)?;
    ctx.note(&format!("Collected {} fields", fields.len()));

    let presets = collect_presets(&ctx.root.join(PRESETS_DIR), &preset_schema)?;
    ctx.note(&format!("Collected {} presets", presets.len()));

    validate_references(&categories, &fields, &presets)?;

    let translations = synthesize(&categories, &fields, &presets);

    Ok(Bundle {
        categories,
        fields,
        presets,
        translations,
    })
}

impl Bundle {
    /// Render every output file in memory.
    pub fn render(&self, config: &Config) -> Result<Vec<OutputFile>> {
        Ok(vec![
            OutputFile {
                name: CATEGORIES_FILE,
                contents: to_pretty_json(&self.categories.to_bundle_map())?,
            },
            OutputFile {
                name: FIELDS_FILE,
                contents: to_pretty_json(&self.fields.to_bundle_map())?,
            },
            OutputFile {
                name: PRESETS_FILE,
                contents: to_pretty_json(&self.presets.to_bundle_map())?,
            },
            OutputFile {
                name: TRANSLATIONS_FILE,
                contents: to_translation_yaml(&config.locale, &self.translations)?,
            },
            OutputFile {
                name: TAGINFO_FILE,
                contents: to_pretty_json(&build_taginfo(&config.taginfo, &self.presets))?,
            },
        ])
    }
}
