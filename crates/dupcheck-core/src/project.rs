//! Project, student and request records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DupcheckError, Result};

/// A project as storage returns it, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

/// Why a stored project cannot take part in a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedProject {
    MissingId,
    MissingTitle,
    MissingStudent,
}

impl std::fmt::Display for MalformedProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedProject::MissingId => write!(f, "missing id"),
            MalformedProject::MissingTitle => write!(f, "missing title"),
            MalformedProject::MissingStudent => write!(f, "missing student id"),
        }
    }
}

/// Text value of `key`, or `None` when absent or not a string
fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl StoredProject {
    /// Decode one stored JSON entry field by field.
    ///
    /// Never fails: a field that is absent or not a string comes back empty,
    /// and [`StoredProject::validate`] then rejects the record.
    pub fn from_value(value: &Value) -> Self {
        StoredProject {
            id: text_field(value, "_id").unwrap_or_default(),
            title: text_field(value, "title"),
            description: text_field(value, "description"),
            student_id: text_field(value, "studentId"),
        }
    }

    /// Validate into a [`Project`].
    ///
    /// A missing description is treated as empty; a missing id, title or
    /// owner makes the record malformed.
    pub fn validate(self) -> std::result::Result<Project, MalformedProject> {
        if self.id.trim().is_empty() {
            return Err(MalformedProject::MissingId);
        }
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(MalformedProject::MissingTitle),
        };
        let student_id = match self.student_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(MalformedProject::MissingStudent),
        };

        Ok(Project {
            id: self.id,
            title,
            description: self.description.unwrap_or_default(),
            student_id,
        })
    }
}

/// A registered project that takes part in duplicate checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub student_id: String,
}

impl From<Project> for StoredProject {
    fn from(project: Project) -> Self {
        StoredProject {
            id: project.id,
            title: Some(project.title),
            description: Some(project.description),
            student_id: Some(project.student_id),
        }
    }
}

/// Display identity of a project owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Text submitted for a duplicate check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CheckRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        CheckRequest {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields must contain something other than whitespace
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DupcheckError::MissingInput);
        }
        Ok(())
    }
}
