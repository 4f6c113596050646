//! Typed views over the source documents.
//!
//! Each record keeps the parsed source object untouched (it is emitted verbatim
//! into the bundle files) next to a typed projection used for validation and
//! translation synthesis.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Tag value matching any value of the key.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub members: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub label: String,
    pub placeholder: Option<String>,
    pub strings: Option<Map<String, Value>>,
    pub key: Option<String>,
    pub keys: Option<Vec<String>>,
}

impl FieldDef {
    /// The placeholder, if it is a non-empty string.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresetDef {
    pub name: String,
    #[serde(default)]
    pub tags: Map<String, Value>,
    #[serde(default)]
    pub terms: Vec<String>,
    pub fields: Option<Vec<String>>,
}

impl PresetDef {
    /// Tag pairs in declaration order, values rendered as text.
    pub fn tag_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.tags
            .iter()
            .map(|(key, value)| (key.as_str(), tag_value_text(value)))
    }

    /// The last declared tag with its value as written in the source.
    pub fn last_tag(&self) -> Option<(&str, &Value)> {
        self.tags.iter().last().map(|(key, value)| (key.as_str(), value))
    }
}

fn tag_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One source file after collection.
#[derive(Debug, Clone)]
pub struct Record<T> {
    pub id: String,
    /// Path of the source file, used in diagnostics.
    pub file_path: String,
    pub def: T,
    /// The parsed document exactly as read.
    pub source: Value,
    /// Translatable strings contributed by this record.
    pub strings: Map<String, Value>,
}

/// Records in collection order with lookup by identifier.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<Record<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Identifiers come from distinct paths of one directory
    /// walk, so they never repeat.
    pub fn insert(&mut self, record: Record<T>) {
        debug_assert!(!self.index.contains_key(&record.id), "duplicate id {}", record.id);
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }

    pub fn get(&self, id: &str) -> Option<&Record<T>> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The bundle mapping: identifier → source document.
    pub fn to_bundle_map(&self) -> Map<String, Value> {
        self.records
            .iter()
            .map(|record| (record.id.clone(), record.source.clone()))
            .collect()
    }

    /// The translation contribution: identifier → translatable strings.
    pub fn to_strings_map(&self) -> Map<String, Value> {
        self.records
            .iter()
            .map(|record| (record.id.clone(), Value::Object(record.strings.clone())))
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
