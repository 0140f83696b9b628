use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{dupcheck, json_store, stdout_json};

#[test]
fn test_init_creates_sqlite_store() {
    let dir = tempdir().unwrap();

    dupcheck(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized store"));

    assert!(dir.path().join("dupcheck.db").exists());

    // Running again leaves the store usable
    dupcheck(dir.path()).arg("init").assert().success();
}

#[test]
fn test_init_json_store_writes_empty_dump() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("portal.json");

    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));

    let dump: serde_json::Value = serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(dump["projects"], serde_json::json!([]));
    assert_eq!(dump["users"], serde_json::json!([]));
}

#[test]
fn test_import_loads_dump_into_sqlite() {
    let dir = tempdir().unwrap();
    let dump = json_store(&dir);
    let store = dir.path().join("portal.db");

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "import"])
        .arg(&dump)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["projects"], 3);
    assert_eq!(json["users"], 2);

    let conn = rusqlite::Connection::open(&store).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_store_from_environment() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    dupcheck(dir.path())
        .env("DUPCHECK_STORE", &store)
        .args(["--format", "json", "check"])
        .args(["--title", "Blockchain Voting", "--description", "Smart contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"p2\""));
}

#[test]
fn test_import_into_json_store_rejected() {
    let dir = tempdir().unwrap();
    let dump = json_store(&dir);

    dupcheck(dir.path())
        .args(["--store", "other.json", "import"])
        .arg(&dump)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("SQLite"));
}

#[test]
fn test_import_missing_dump_fails() {
    let dir = tempdir().unwrap();

    dupcheck(dir.path())
        .args(["import", "missing.json"])
        .assert()
        .failure();
}
