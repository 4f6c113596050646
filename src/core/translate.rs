//! Translation source synthesis.
//!
//! The translation document mirrors the collections but keeps only
//! translatable strings. Next to a string, a key with a trailing
//! [`COMMENT_MARKER`] holds context for translators (which tags the string
//! describes). The YAML emitter turns those keys into comment lines.

use serde_json::{Map, Value};

use super::model::{CategoryDef, Collection, FieldDef, PresetDef, Record};

pub const COMMENT_MARKER: char = '#';

/// Field whose options describe access restrictions and carry a
/// `{title, description}` pair per option.
const ACCESS_FIELD: &str = "access";

pub fn comment_key(key: &str) -> String {
    format!("{}{}", key, COMMENT_MARKER)
}

pub fn is_comment_key(key: &str) -> bool {
    key.ends_with(COMMENT_MARKER)
}

/// Instruction that replaces every preset's `terms` in the translation source.
pub fn terms_placeholder(name: &str) -> String {
    format!(
        "<translate with synonyms or related terms for '{}', separated by commas>",
        name
    )
}

/// Build the translation document `{categories, fields, presets}`.
pub fn synthesize(
    categories: &Collection<CategoryDef>,
    fields: &Collection<FieldDef>,
    presets: &Collection<PresetDef>,
) -> Map<String, Value> {
    let fields: Map<String, Value> = fields
        .iter()
        .map(|field| (field.id.clone(), Value::Object(field_entry(field))))
        .collect();

    let presets: Map<String, Value> = presets
        .iter()
        .map(|preset| (preset.id.clone(), Value::Object(preset_entry(preset))))
        .collect();

    let mut document = Map::new();
    document.insert(
        "categories".to_string(),
        Value::Object(categories.to_strings_map()),
    );
    document.insert("fields".to_string(), Value::Object(fields));
    document.insert("presets".to_string(), Value::Object(presets));
    document
}

fn field_entry(field: &Record<FieldDef>) -> Map<String, Value> {
    let def = &field.def;
    let mut entry = Map::new();

    for (key, value) in &field.strings {
        let value = match (key.as_str(), value) {
            ("options", Value::Object(options)) if !options.is_empty() => {
                Value::Object(annotate_options(&field.id, def, options))
            }
            _ => value.clone(),
        };
        entry.insert(key.clone(), value);
    }

    if let Some(keys) = &def.keys {
        let label = keys
            .iter()
            .map(|key| format!("{}=*", key))
            .collect::<Vec<_>>()
            .join(", ");
        entry.insert(comment_key("label"), Value::String(label));
    } else if let Some(key) = &def.key {
        entry.insert(comment_key("label"), Value::String(format!("{}=*", key)));
    }

    if def.placeholder().is_some() {
        entry.insert(
            comment_key("placeholder"),
            Value::String(format!("{} field placeholder", field.id)),
        );
    }

    entry
}

/// Rebuild an options map with a tag comment for every option.
fn annotate_options(id: &str, def: &FieldDef, options: &Map<String, Value>) -> Map<String, Value> {
    let mut annotated = Map::new();

    for (option, label) in options {
        match (&def.keys, &def.key) {
            (Some(_), _) if id == ACCESS_FIELD => {
                let label = match label {
                    Value::Object(strings) => {
                        let comment = Value::String(format!("{}={}", ACCESS_FIELD, option));
                        let mut strings = strings.clone();
                        strings.insert(comment_key("title"), comment.clone());
                        strings.insert(comment_key("description"), comment);
                        Value::Object(strings)
                    }
                    other => other.clone(),
                };
                annotated.insert(option.clone(), label);
            }
            (Some(_), _) => {
                annotated.insert(option.clone(), label.clone());
                annotated.insert(
                    comment_key(option),
                    Value::String(format!("{}=yes", option)),
                );
            }
            (None, Some(key)) => {
                annotated.insert(option.clone(), label.clone());
                annotated.insert(
                    comment_key(option),
                    Value::String(format!("{}={}", key, option)),
                );
            }
            (None, None) => {
                annotated.insert(option.clone(), label.clone());
            }
        }
    }

    annotated
}

fn preset_entry(preset: &Record<PresetDef>) -> Map<String, Value> {
    let def = &preset.def;
    let mut entry = preset.strings.clone();

    if !def.tags.is_empty() {
        let tags = def
            .tag_pairs()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        entry.insert(comment_key("name"), Value::String(tags));
    }

    if !def.terms.is_empty() {
        entry.insert(
            comment_key("terms"),
            Value::String(format!("terms: {}", def.terms.join(","))),
        );
    }

    entry.insert(
        "terms".to_string(),
        Value::String(terms_placeholder(&def.name)),
    );

    entry
}
