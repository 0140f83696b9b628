use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::error::{DupcheckError, Result};
use crate::map_db_err;
use crate::project::{Student, StoredProject};
use crate::store::{create_schema, CorpusLoader, StoreDump, UserDirectory, UserRecord};

/// SQLite-backed portal store
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing database
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DupcheckError::StoreNotFound {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open(path).map_err(|e| {
            DupcheckError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(SqliteStore { conn })
    }

    /// Open or create a database and make sure the schema exists
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            DupcheckError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;
        create_schema(&conn)
            .map_err(|e| DupcheckError::Other(format!("failed to create database schema: {}", e)))?;
        Ok(SqliteStore { conn })
    }

    /// In-memory database with the schema applied
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(SqliteStore { conn })
    }

    pub fn insert_project(&self, project: &StoredProject) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO projects (id, title, description, student_id) VALUES (?1, ?2, ?3, ?4)",
                params![
                    project.id,
                    project.title,
                    project.description,
                    project.student_id
                ],
            )
            .map_err(|e| map_db_err!("insert project", e))?;
        Ok(())
    }

    pub fn insert_user(&self, user: &UserRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO users (id, name, email, role) VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.name, user.email, user.role],
            )
            .map_err(|e| map_db_err!("insert user", e))?;
        Ok(())
    }

    /// Load a dump in one transaction; returns (projects, users) written
    pub fn import(&mut self, dump: &StoreDump) -> Result<(usize, usize)> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin import transaction", e))?;

        for user in &dump.users {
            tx.execute(
                "INSERT OR REPLACE INTO users (id, name, email, role) VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.name, user.email, user.role],
            )
            .map_err(|e| map_db_err!("import user", e))?;
        }
        for project in &dump.projects {
            tx.execute(
                "INSERT OR REPLACE INTO projects (id, title, description, student_id) VALUES (?1, ?2, ?3, ?4)",
                params![
                    project.id,
                    project.title,
                    project.description,
                    project.student_id
                ],
            )
            .map_err(|e| map_db_err!("import project", e))?;
        }

        tx.commit()
            .map_err(|e| map_db_err!("commit import transaction", e))?;
        Ok((dump.projects.len(), dump.users.len()))
    }

    fn query_projects(&self) -> rusqlite::Result<Vec<StoredProject>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, description, student_id FROM projects ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredProject {
                id: text_column(row, 0)?.unwrap_or_default(),
                title: text_column(row, 1)?,
                description: text_column(row, 2)?,
                student_id: text_column(row, 3)?,
            })
        })?;
        rows.collect()
    }

    fn query_students(&self, ids: &[String]) -> rusqlite::Result<Vec<Student>> {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT id, name FROM users WHERE id IN ({})", placeholders);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let found = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|s| &s.id == id).cloned())
            .collect())
    }
}

/// Text in column `idx`; NULL, numbers, blobs and invalid UTF-8 read as `None`
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok().map(str::to_string),
        _ => None,
    })
}

impl CorpusLoader for SqliteStore {
    fn load_projects(&self) -> Result<Vec<StoredProject>> {
        self.query_projects().map_err(DupcheckError::corpus)
    }
}

impl UserDirectory for SqliteStore {
    fn find_students(&self, ids: &[String]) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.query_students(ids).map_err(DupcheckError::directory)
    }
}
