//! JSON Schema validation of field and preset documents.

use std::path::Path;

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

use crate::core::source::read_json;
use crate::issues::{SchemaViolationIssue, Violation};

/// A compiled schema.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    pub fn load(path: &Path) -> Result<Self> {
        let schema = read_json(path)?;
        Self::from_value(&schema).map_err(|err| anyhow!("{}: {}", path.display(), err))
    }

    pub fn from_value(schema: &Value) -> Result<Self> {
        let validator =
            jsonschema::validator_for(schema).map_err(|err| anyhow!("Invalid schema: {}", err))?;
        Ok(Self { validator })
    }

    /// Check `instance` and collect every violation.
    pub fn validate(&self, file_path: &str, instance: &Value) -> Result<(), SchemaViolationIssue> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|error| Violation {
                property: property_path(&error.instance_path.to_string()),
                message: error.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolationIssue {
                file_path: file_path.to_string(),
                violations,
            })
        }
    }
}

/// Render a JSON pointer as a dotted property path rooted at `instance`.
///
/// `/tags/amenity` → `instance.tags.amenity`, `/fields/0` → `instance.fields[0]`.
/// The document root has no property path.
fn property_path(pointer: &str) -> Option<String> {
    if pointer.is_empty() {
        return None;
    }

    let mut path = String::from("instance");
    for segment in pointer.trim_start_matches('/').split('/') {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push_str(&format!("[{}]", segment));
        } else {
            path.push('.');
            path.push_str(&segment);
        }
    }
    Some(path)
}
