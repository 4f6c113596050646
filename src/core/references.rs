//! Cross-reference checks between the collections.

use super::model::{CategoryDef, Collection, FieldDef, PresetDef};
use crate::issues::{Issue, UnknownFieldIssue, UnknownPresetIssue};

/// Run both reference passes: category members first, then preset fields.
pub fn validate_references(
    categories: &Collection<CategoryDef>,
    fields: &Collection<FieldDef>,
    presets: &Collection<PresetDef>,
) -> Result<(), Issue> {
    validate_category_presets(categories, presets)?;
    validate_preset_fields(presets, fields)?;
    Ok(())
}

/// Every category member must name a collected preset.
pub fn validate_category_presets(
    categories: &Collection<CategoryDef>,
    presets: &Collection<PresetDef>,
) -> Result<(), Issue> {
    for category in categories {
        for member in category.def.members.iter().flatten() {
            if !presets.contains(member) {
                return Err(UnknownPresetIssue {
                    preset_id: member.clone(),
                    category_name: category.def.name.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Every preset field must name a collected field.
pub fn validate_preset_fields(
    presets: &Collection<PresetDef>,
    fields: &Collection<FieldDef>,
) -> Result<(), Issue> {
    for preset in presets {
        for field in preset.def.fields.iter().flatten() {
            if !fields.contains(field) {
                return Err(UnknownFieldIssue {
                    field_id: field.clone(),
                    preset_name: preset.def.name.clone(),
                }
                .into());
            }
        }
    }
    Ok(())
}
