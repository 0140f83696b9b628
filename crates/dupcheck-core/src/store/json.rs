use std::path::{Path, PathBuf};

use crate::error::{DupcheckError, Result};
use crate::project::{Student, StoredProject};
use crate::store::{CorpusLoader, StoreDump, UserDirectory};

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Memory(StoreDump),
}

/// Store backed by a JSON dump.
///
/// A file-backed store re-reads the file on every call, so each check sees
/// the file as it is at that moment.
#[derive(Debug, Clone)]
pub struct JsonStore {
    source: Source,
}

impl JsonStore {
    pub fn open(path: &Path) -> Self {
        JsonStore {
            source: Source::File(path.to_path_buf()),
        }
    }

    pub fn from_dump(dump: StoreDump) -> Self {
        JsonStore {
            source: Source::Memory(dump),
        }
    }

    fn read(&self) -> Result<StoreDump> {
        match &self.source {
            Source::File(path) => StoreDump::load(path),
            Source::Memory(dump) => Ok(dump.clone()),
        }
    }
}

impl CorpusLoader for JsonStore {
    fn load_projects(&self) -> Result<Vec<StoredProject>> {
        let dump = self.read().map_err(DupcheckError::corpus)?;
        Ok(dump.projects)
    }
}

impl UserDirectory for JsonStore {
    fn find_students(&self, ids: &[String]) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let dump = self.read().map_err(DupcheckError::directory)?;
        Ok(dump.students(ids))
    }
}
