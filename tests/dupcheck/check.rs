use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{dupcheck, json_store, sqlite_store, stderr_json, stdout_json};

// ============================================================================
// Response payloads
// ============================================================================

#[test]
fn test_check_reports_duplicate_with_owner() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Smart Irrigation System"])
        .args(["--description", "IoT based irrigation using soil sensors"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["msg"],
        "Your project was rejected because it repeats the projects below"
    );

    let similar = json["similarProjects"].as_array().unwrap();
    assert_eq!(similar[0]["_id"], "p1");
    assert_eq!(similar[0]["studentId"], "u1");
    assert_eq!(similar[0]["studentName"], "Asha");
    assert!((similar[0]["score"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!(similar.iter().all(|p| p["_id"] != "p2"));

    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["_id"], "u1");
    assert_eq!(users[0]["name"], "Asha");
}

#[test]
fn test_check_scores_are_descending() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "--threshold", "0"])
        .args(["--title", "Irrigation"])
        .args(["--description", "Soil moisture sensors"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    let scores: Vec<f64> = json["similarProjects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores.len(), 3);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_check_unrelated_project_can_submit() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Weather Prediction App"])
        .args(["--description", "Predicting rainfall using ML models"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"msg": "No duplication, you can submit"})
    );
}

#[test]
fn test_check_empty_store_reports_no_projects() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("empty.db");

    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .arg("init")
        .assert()
        .success();

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "-t", "Library Portal", "-d", "Books"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"message": "no similar projects found", "similarProjects": []})
    );
}

#[test]
fn test_check_human_output() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["check", "--title", "Blockchain Voting"])
        .args(["--description", "Decentralized voting using smart contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected because it repeats"))
        .stdout(predicate::str::contains("Blockchain Voting (p2)"))
        .stdout(predicate::str::contains("student: Ravi"));
}

#[test]
fn test_check_against_sqlite_store() {
    let dir = tempdir().unwrap();
    let store = sqlite_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Blockchain Voting"])
        .args(["--description", "Decentralized voting using smart contracts"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["similarProjects"][0]["_id"], "p2");
    assert_eq!(json["users"][0]["name"], "Ravi");
}

// ============================================================================
// Request input
// ============================================================================

#[test]
fn test_check_reads_request_from_stdin() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "--request", "-"])
        .write_stdin(
            r#"{"title": "Smart Irrigation System", "description": "IoT based irrigation using soil sensors"}"#,
        )
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["similarProjects"][0]["_id"], "p1");
}

#[test]
fn test_check_reads_request_from_file() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);
    let request = dir.path().join("request.json");
    fs::write(
        &request,
        r#"{"title": "Weather Prediction App", "description": "Predicting rainfall"}"#,
    )
    .unwrap();

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "--request"])
        .arg(&request)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["msg"], "No duplication, you can submit");
}

#[test]
fn test_request_conflicts_with_title() {
    let dir = tempdir().unwrap();

    dupcheck(dir.path())
        .args(["check", "--title", "x", "--request", "-"])
        .assert()
        .failure()
        .code(2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_title_is_client_error() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "--description", "Only a description"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let json = stderr_json(&output);
    assert_eq!(json["error"], "Title and description are required");
    assert_eq!(json["type"], "missing_input");
}

#[test]
fn test_missing_input_checked_before_store() {
    let dir = tempdir().unwrap();

    // The store does not exist; incomplete input is still a client error
    dupcheck(dir.path())
        .args(["--store", "missing.db", "check", "--title", "Library Portal"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Title and description are required"));
}

#[test]
fn test_missing_store_is_server_error() {
    let dir = tempdir().unwrap();

    let output = dupcheck(dir.path())
        .args(["--store", "missing.db", "--format", "json", "check"])
        .args(["--title", "Library Portal", "--description", "Book tracking"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json = stderr_json(&output);
    assert_eq!(json["error"], "Server error");
    assert_eq!(json["type"], "store_not_found");
    assert!(json["detail"].as_str().unwrap().contains("missing.db"));
}

#[test]
fn test_corrupt_store_is_server_error() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("broken.json");
    fs::write(&store, "{ not json").unwrap();

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check", "-t", "Library", "-d", "Books"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"], "Server error");
}

#[test]
fn test_malformed_records_are_skipped() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("portal.json");
    fs::write(
        &store,
        r#"{
  "projects": [
    {"_id": "p1", "title": "Smart Irrigation System", "description": "IoT irrigation", "studentId": "u1"},
    {"_id": "p2", "description": "Smart Irrigation System", "studentId": "u1"},
    {"_id": "p3", "title": "Smart Irrigation System", "description": "IoT irrigation"}
  ],
  "users": [{"_id": "u1", "name": "Asha"}]
}"#,
    )
    .unwrap();

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Smart Irrigation System", "--description", "IoT irrigation"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let similar = json["similarProjects"].as_array().unwrap();
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0]["_id"], "p1");
}

#[test]
fn test_unreadable_json_entries_do_not_fail_the_check() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("portal.json");
    fs::write(
        &store,
        r#"{
  "projects": [
    {"_id": "p1", "title": "Smart Irrigation System", "description": "IoT irrigation", "studentId": "u1"},
    {"_id": "p2", "title": 42, "description": "IoT irrigation", "studentId": "u1"},
    {"title": "Smart Irrigation System", "description": "IoT irrigation", "studentId": "u1"}
  ],
  "users": [{"_id": "u1", "name": "Asha"}]
}"#,
    )
    .unwrap();

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Smart Irrigation System", "--description", "IoT irrigation"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let similar = stdout_json(&output)["similarProjects"].clone();
    assert_eq!(similar.as_array().unwrap().len(), 1);
    assert_eq!(similar[0]["_id"], "p1");

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "scores"])
        .args(["--title", "Smart Irrigation System", "--description", "IoT irrigation"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["skipped"], 2);
}

#[test]
fn test_sqlite_row_without_id_does_not_fail_the_check() {
    let dir = tempdir().unwrap();
    let store = sqlite_store(&dir);

    let conn = rusqlite::Connection::open(&store).unwrap();
    conn.execute(
        "INSERT INTO projects (id, title, description, student_id) VALUES (NULL, 'Other', 'x', 'u1')",
        [],
    )
    .unwrap();
    drop(conn);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "check"])
        .args(["--title", "Blockchain Voting"])
        .args(["--description", "Decentralized voting using smart contracts"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["similarProjects"][0]["_id"], "p2");
}
