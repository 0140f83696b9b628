use serde::Serialize;
use serde_json::Value;

use crate::project::{Project, Student};

/// Reported when there are no registered projects to compare against
pub const NO_CORPUS_MESSAGE: &str = "no similar projects found";

/// Reported when no project reaches the threshold
pub const NO_DUPLICATE_MESSAGE: &str = "No duplication, you can submit";

/// Reported alongside the matching projects
pub const DUPLICATE_MESSAGE: &str =
    "Your project was rejected because it repeats the projects below";

/// A registered project that scored at or above the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedProject {
    #[serde(flatten)]
    pub project: Project,
    pub score: f64,
    /// Owner's display name, when the directory knows the owner
    pub student_name: Option<String>,
}

/// Every project that reached the threshold, with owner identities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateReport {
    /// Matches, best score first
    pub projects: Vec<MatchedProject>,
    /// Owners of the matched projects, one entry per student
    pub students: Vec<Student>,
    /// Number of valid projects compared
    pub compared: usize,
    /// Number of malformed stored projects left out
    pub skipped: usize,
}

/// Result of a duplicate check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Nothing registered yet; no scoring was done
    NoCorpus { skipped: usize },
    /// Projects were compared and none reached the threshold
    NoDuplicate { compared: usize, skipped: usize },
    /// One or more likely duplicates
    Duplicates(DuplicateReport),
}

impl CheckOutcome {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, CheckOutcome::Duplicates(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            CheckOutcome::NoCorpus { .. } => NO_CORPUS_MESSAGE,
            CheckOutcome::NoDuplicate { .. } => NO_DUPLICATE_MESSAGE,
            CheckOutcome::Duplicates(_) => DUPLICATE_MESSAGE,
        }
    }

    /// Matched projects; empty unless duplicates were found
    pub fn matches(&self) -> &[MatchedProject] {
        match self {
            CheckOutcome::Duplicates(report) => &report.projects,
            _ => &[],
        }
    }

    /// Response payload returned to the registration workflow
    pub fn to_json(&self) -> Value {
        match self {
            CheckOutcome::NoCorpus { .. } => serde_json::json!({
                "message": NO_CORPUS_MESSAGE,
                "similarProjects": [],
            }),
            CheckOutcome::NoDuplicate { .. } => serde_json::json!({
                "msg": NO_DUPLICATE_MESSAGE,
            }),
            CheckOutcome::Duplicates(report) => serde_json::json!({
                "msg": DUPLICATE_MESSAGE,
                "similarProjects": report.projects,
                "users": report.students,
            }),
        }
    }
}
