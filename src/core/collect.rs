//! Collectors for categories, fields and presets.
//!
//! Each collector reads its directory, validates every document where a schema
//! applies, and returns the records together with their translatable strings.
//! Collection stops at the first invalid document.

use std::path::Path;

use anyhow::{Context, anyhow};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{
    error::BuildError,
    model::{CategoryDef, Collection, FieldDef, PresetDef, Record},
    schema::SchemaValidator,
    source::{category_id, find_flat, find_recursive, read_json, relative_id},
};
use crate::issues::StringCollisionIssue;

/// Read `categories/*.json`. Categories are not schema-validated.
pub fn collect_categories(dir: &Path) -> Result<Collection<CategoryDef>, BuildError> {
    let mut categories = Collection::new();

    for path in find_flat(dir)? {
        let id = category_id(&path)
            .ok_or_else(|| anyhow!("Invalid category file name: {}", path.display()))?;
        let (source, def) = load::<CategoryDef>(&path, None)?;
        let strings = category_strings(&def);

        categories.insert(Record {
            id,
            file_path: path.display().to_string(),
            def,
            source,
            strings,
        });
    }

    Ok(categories)
}

/// Read `fields/**/*.json`, validating each against the field schema.
pub fn collect_fields(
    dir: &Path,
    schema: &SchemaValidator,
) -> Result<Collection<FieldDef>, BuildError> {
    let mut fields = Collection::new();

    for path in find_recursive(dir)? {
        let id = relative_id(dir, &path)
            .ok_or_else(|| anyhow!("Invalid field file name: {}", path.display()))?;
        let file_path = path.display().to_string();
        let (source, def) = load::<FieldDef>(&path, Some(schema))?;
        let strings = field_strings(&file_path, &id, &def)?;

        fields.insert(Record {
            id,
            file_path,
            def,
            source,
            strings,
        });
    }

    Ok(fields)
}

/// Read `presets/**/*.json`, validating each against the preset schema.
pub fn collect_presets(
    dir: &Path,
    schema: &SchemaValidator,
) -> Result<Collection<PresetDef>, BuildError> {
    let mut presets = Collection::new();

    for path in find_recursive(dir)? {
        let id = relative_id(dir, &path)
            .ok_or_else(|| anyhow!("Invalid preset file name: {}", path.display()))?;
        let (source, def) = load::<PresetDef>(&path, Some(schema))?;
        let strings = preset_strings(&def);

        presets.insert(Record {
            id,
            file_path: path.display().to_string(),
            def,
            source,
            strings,
        });
    }

    Ok(presets)
}

/// Parse a document, validate it, then project it onto its typed definition.
fn load<T: DeserializeOwned>(
    path: &Path,
    schema: Option<&SchemaValidator>,
) -> Result<(Value, T), BuildError> {
    let source = read_json(path)?;

    if let Some(schema) = schema {
        schema.validate(&path.display().to_string(), &source)?;
    }

    let def = serde_json::from_value(source.clone())
        .with_context(|| format!("Unexpected document shape: {}", path.display()))?;
    Ok((source, def))
}

fn category_strings(def: &CategoryDef) -> Map<String, Value> {
    let mut strings = Map::new();
    strings.insert("name".to_string(), Value::String(def.name.clone()));
    strings
}

/// `label`, then `placeholder` when present, then every entry of `strings`.
///
/// A `strings` entry may not redefine a key that is already taken.
fn field_strings(
    file_path: &str,
    id: &str,
    def: &FieldDef,
) -> Result<Map<String, Value>, StringCollisionIssue> {
    let mut strings = Map::new();
    strings.insert("label".to_string(), Value::String(def.label.clone()));

    if let Some(placeholder) = def.placeholder() {
        strings.insert(
            "placeholder".to_string(),
            Value::String(placeholder.to_string()),
        );
    }

    for (key, value) in def.strings.iter().flatten() {
        if strings.contains_key(key) {
            return Err(StringCollisionIssue {
                file_path: file_path.to_string(),
                field_id: id.to_string(),
                key: key.clone(),
            });
        }
        strings.insert(key.clone(), value.clone());
    }

    Ok(strings)
}

fn preset_strings(def: &PresetDef) -> Map<String, Value> {
    let mut strings = Map::new();
    strings.insert("name".to_string(), Value::String(def.name.clone()));
    strings.insert("terms".to_string(), Value::String(def.terms.join(",")));
    strings
}
