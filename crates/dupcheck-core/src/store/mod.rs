//! Storage collaborators consulted by a duplicate check
//!
//! A check reads from two sources: the corpus of registered projects and the
//! directory of students who own them. Both are read-only from the checker's
//! point of view and are queried fresh on every check.

mod dump;
mod json;
mod schema;
mod sqlite;

use std::path::Path;

use crate::error::{DupcheckError, Result};
use crate::project::{Student, StoredProject};

pub use dump::{StoreDump, UserRecord};
pub use json::JsonStore;
pub use schema::create_schema;
pub use sqlite::SqliteStore;

/// Source of all registered projects
pub trait CorpusLoader {
    /// Every stored project, in storage order
    fn load_projects(&self) -> Result<Vec<StoredProject>>;
}

/// Source of student display names
pub trait UserDirectory {
    /// Students for the given ids. Unknown ids are omitted from the result.
    fn find_students(&self, ids: &[String]) -> Result<Vec<Student>>;
}

/// A backend that serves both collaborators
pub trait ProjectStore: CorpusLoader + UserDirectory {}

impl<T: CorpusLoader + UserDirectory> ProjectStore for T {}

/// Kind of store selected for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// JSON dump file (`.json`)
    Json,
    /// SQLite database (anything else)
    Sqlite,
}

impl StoreKind {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreKind::Json,
            _ => StoreKind::Sqlite,
        }
    }
}

/// Open an existing store, choosing the backend from the file extension
pub fn open(path: &Path) -> Result<Box<dyn ProjectStore>> {
    if !path.exists() {
        return Err(DupcheckError::StoreNotFound {
            path: path.to_path_buf(),
        });
    }

    match StoreKind::for_path(path) {
        StoreKind::Json => Ok(Box::new(JsonStore::open(path))),
        StoreKind::Sqlite => Ok(Box::new(SqliteStore::open(path)?)),
    }
}
