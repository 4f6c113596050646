//! YAML rendering of the translation source.
//!
//! Keys are sorted so that a comment key (`name#`) lands directly above the key
//! it annotates, then comment-key lines are rewritten into real YAML comments:
//!
//! ```text
//! name#: amenity=cafe      # amenity=cafe
//! name: Cafe           →   name: Cafe
//! ```

use std::{cmp::Ordering, sync::LazyLock};

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::core::translate::COMMENT_MARKER;

/// A mapping line whose key (plain, single- or double-quoted) ends with `#`.
///
/// A plain key never contains `: ` but may hold other colons and start with
/// `?` or `-`.
static COMMENT_KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"(?m)^(?P<indent> *)(?:'(?:[^']|'')*#'|"(?:[^"\\]|\\.)*#"|(?:[^\s'"?\-]|[?\-]\S)(?:[^:\n]|:\S)*?#):(?: (?P<value>.*))?$"##,
    )
    .expect("comment key pattern is valid")
});

/// Render `{<locale>: {presets: <document>}}` with comment keys as comments.
pub fn to_translation_yaml(locale: &str, document: &Map<String, Value>) -> Result<String> {
    let mut presets = Map::new();
    presets.insert("presets".to_string(), Value::Object(document.clone()));
    let mut root = Map::new();
    root.insert(locale.to_string(), Value::Object(presets));

    let sorted = sort_keys(&Value::Object(root));
    let yaml = serde_yaml::to_string(&sorted).context("Failed to serialize YAML")?;
    Ok(comment_out_keys(&yaml))
}

/// Order keys lexicographically, except that `key#` sorts immediately before `key`.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    let (a_base, a_is_comment) = split_comment(a);
    let (b_base, b_is_comment) = split_comment(b);
    a_base
        .cmp(b_base)
        .then_with(|| b_is_comment.cmp(&a_is_comment))
}

fn split_comment(key: &str) -> (&str, bool) {
    match key.strip_suffix(COMMENT_MARKER) {
        Some(base) => (base, true),
        None => (key, false),
    }
}

/// Recursively rebuild every object with its keys in [`compare_keys`] order.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Replace `<indent><key>#: <value>` with `<indent># <value>`.
fn comment_out_keys(yaml: &str) -> String {
    COMMENT_KEY_LINE
        .replace_all(yaml, |caps: &Captures| {
            let indent = &caps["indent"];
            match caps.name("value") {
                Some(value) => format!("{}# {}", indent, value.as_str()),
                None => format!("{}#", indent),
            }
        })
        .into_owned()
}
