//! Issue types for preset bundle validation.
//!
//! Every issue is fatal: the build stops at the first one and no output file is
//! written. Issues carry everything the reporter needs to describe the problem.

use std::fmt;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    SchemaViolation,
    UnknownPreset,
    UnknownField,
    StringCollision,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::SchemaViolation => write!(f, "schema-violation"),
            Rule::UnknownPreset => write!(f, "unknown-preset"),
            Rule::UnknownField => write!(f, "unknown-field"),
            Rule::StringCollision => write!(f, "string-collision"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// One failed schema assertion inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Property path such as `instance.tags.amenity`.
    /// `None` when the violation is about the document root.
    pub property: Option<String>,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{} {}", property, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A field or preset file does not conform to its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolationIssue {
    pub file_path: String,
    pub violations: Vec<Violation>,
}

/// A category lists a member preset that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPresetIssue {
    pub preset_id: String,
    pub category_name: String,
}

/// A preset lists a field that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldIssue {
    pub field_id: String,
    pub preset_name: String,
}

/// A field's `strings` map redefines `label` or `placeholder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringCollisionIssue {
    pub file_path: String,
    pub field_id: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    SchemaViolation(SchemaViolationIssue),
    UnknownPreset(UnknownPresetIssue),
    UnknownField(UnknownFieldIssue),
    StringCollision(StringCollisionIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        match self {
            Issue::SchemaViolation(_) => Rule::SchemaViolation,
            Issue::UnknownPreset(_) => Rule::UnknownPreset,
            Issue::UnknownField(_) => Rule::UnknownField,
            Issue::StringCollision(_) => Rule::StringCollision,
        }
    }

    /// One-line headline; schema violations list their details separately.
    pub fn message(&self) -> String {
        match self {
            Issue::SchemaViolation(issue) => format!("{}:", issue.file_path),
            Issue::UnknownPreset(issue) => format!(
                "Unknown preset: {} in category {}",
                issue.preset_id, issue.category_name
            ),
            Issue::UnknownField(issue) => format!(
                "Unknown preset field: {} in preset {}",
                issue.field_id, issue.preset_name
            ),
            Issue::StringCollision(issue) => format!(
                "{}: strings.{} collides with the '{}' of field {}",
                issue.file_path, issue.key, issue.key, issue.field_id
            ),
        }
    }

    pub fn details(&self) -> &[Violation] {
        match self {
            Issue::SchemaViolation(issue) => &issue.violations,
            _ => &[],
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        for violation in self.details() {
            write!(f, "\n{}", violation)?;
        }
        Ok(())
    }
}

impl From<SchemaViolationIssue> for Issue {
    fn from(issue: SchemaViolationIssue) -> Self {
        Issue::SchemaViolation(issue)
    }
}

impl From<UnknownPresetIssue> for Issue {
    fn from(issue: UnknownPresetIssue) -> Self {
        Issue::UnknownPreset(issue)
    }
}

impl From<UnknownFieldIssue> for Issue {
    fn from(issue: UnknownFieldIssue) -> Self {
        Issue::UnknownField(issue)
    }
}

impl From<StringCollisionIssue> for Issue {
    fn from(issue: StringCollisionIssue) -> Self {
        Issue::StringCollision(issue)
    }
}
