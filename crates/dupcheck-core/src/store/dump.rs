use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DupcheckError, Result};
use crate::project::{Student, StoredProject};

/// A user as exported from the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<&UserRecord> for Student {
    fn from(user: &UserRecord) -> Self {
        Student {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// Decode `projects` entry by entry so one bad entry cannot sink the rest
fn lenient_projects<'de, D>(deserializer: D) -> std::result::Result<Vec<StoredProject>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries.iter().map(StoredProject::from_value).collect())
}

/// Portable snapshot of the portal's projects and users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDump {
    #[serde(default, deserialize_with = "lenient_projects")]
    pub projects: Vec<StoredProject>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl StoreDump {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DupcheckError::Other(format!("failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Students whose ids appear in `ids`, in the order of `ids`
    pub fn students(&self, ids: &[String]) -> Vec<Student> {
        ids.iter()
            .filter_map(|id| self.users.iter().find(|u| &u.id == id))
            .map(Student::from)
            .collect()
    }
}
