use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{dupcheck, json_store, stdout_json};

#[test]
fn test_scores_lists_every_project_in_store_order() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    let output = dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["--format", "json", "scores"])
        .args(["--title", "Smart Irrigation System"])
        .args(["--description", "IoT based irrigation using soil sensors"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["threshold"], 0.4);
    assert_eq!(json["skipped"], 0);

    let scores = json["scores"].as_array().unwrap();
    let ids: Vec<_> = scores.iter().map(|s| s["_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    assert_eq!(scores[0]["matched"], true);
    assert_eq!(scores[1]["matched"], false);
    assert!(scores
        .iter()
        .all(|s| (0.0..=1.0).contains(&s["score"].as_f64().unwrap())));
}

#[test]
fn test_scores_human_marks_matches() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["scores", "-t", "Blockchain Voting", "-d", "Smart contracts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* p2"))
        .stdout(predicate::str::contains("threshold 0.40"));
}

#[test]
fn test_scores_rejects_missing_description() {
    let dir = tempdir().unwrap();
    let store = json_store(&dir);

    dupcheck(dir.path())
        .arg("--store")
        .arg(&store)
        .args(["scores", "--title", "Blockchain Voting"])
        .assert()
        .failure()
        .code(2);
}
