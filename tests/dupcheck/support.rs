use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// Get a Command for dupcheck, isolated from the caller's environment
pub fn dupcheck(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("dupcheck");
    cmd.current_dir(dir)
        .env("DUPCHECK_CONFIG_DIR", dir.join("config"))
        .env_remove("DUPCHECK_STORE")
        .env_remove("DUPCHECK_CONFIG")
        .env_remove("DUPCHECK_THRESHOLD")
        .env_remove("DUPCHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Three projects owned by two students
pub const PORTAL_DUMP: &str = r#"{
  "projects": [
    {
      "_id": "p1",
      "title": "Smart Irrigation System",
      "description": "IoT based irrigation using soil sensors",
      "studentId": "u1"
    },
    {
      "_id": "p2",
      "title": "Blockchain Voting",
      "description": "Decentralized voting using smart contracts",
      "studentId": "u2"
    },
    {
      "_id": "p3",
      "title": "Automated Irrigation Controller",
      "description": "Irrigation scheduling using soil moisture sensors",
      "studentId": "u1"
    }
  ],
  "users": [
    { "_id": "u1", "name": "Asha", "role": "student" },
    { "_id": "u2", "name": "Ravi", "role": "student" }
  ]
}"#;

/// Write the portal dump as a JSON store and return its path
pub fn json_store(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("portal.json");
    fs::write(&path, PORTAL_DUMP).unwrap();
    path
}

/// Import the portal dump into a fresh SQLite store and return its path
#[allow(dead_code)]
pub fn sqlite_store(dir: &TempDir) -> PathBuf {
    let dump = json_store(dir);
    let store = dir.path().join("portal.db");
    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .arg("import")
        .arg(&dump)
        .assert()
        .success();
    store
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Parse stderr as JSON
#[allow(dead_code)]
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not JSON")
}
