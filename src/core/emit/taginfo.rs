//! Taginfo project file (<https://wiki.openstreetmap.org/wiki/Taginfo/Projects>).

use serde::Serialize;
use serde_json::Value;

use crate::config::TaginfoProject;
use crate::core::model::{Collection, PresetDef, WILDCARD};

pub const TAGINFO_DATA_FORMAT: u32 = 1;

#[derive(Debug, Serialize)]
pub struct Taginfo<'a> {
    pub data_format: u32,
    pub data_url: &'a str,
    pub project: ProjectSection<'a>,
    pub tags: Vec<TaginfoTag>,
}

#[derive(Debug, Serialize)]
pub struct ProjectSection<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub project_url: &'a str,
    pub doc_url: &'a str,
    pub keywords: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaginfoTag {
    pub key: String,
    /// Emitted as declared; a non-string value stays non-string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

pub fn build_taginfo<'a>(
    project: &'a TaginfoProject,
    presets: &Collection<PresetDef>,
) -> Taginfo<'a> {
    Taginfo {
        data_format: TAGINFO_DATA_FORMAT,
        data_url: &project.data_url,
        project: ProjectSection {
            name: &project.name,
            description: &project.description,
            project_url: &project.project_url,
            doc_url: &project.doc_url,
            keywords: &project.keywords,
        },
        tags: presets.iter().filter_map(|preset| last_tag(&preset.def)).collect(),
    }
}

/// The preset's last declared tag; a wildcard value is left out.
///
/// Presets without tags contribute nothing.
pub fn last_tag(preset: &PresetDef) -> Option<TaginfoTag> {
    let (key, value) = preset.last_tag()?;
    Some(TaginfoTag {
        key: key.to_string(),
        value: (value.as_str() != Some(WILDCARD)).then(|| value.clone()),
    })
}
