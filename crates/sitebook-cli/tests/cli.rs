//! End-to-end tests for the `sitebook` binary

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use sitebook_test_utils::{sample_budget, sample_tasks, snapshot_json};
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let text = snapshot_json(&sample_tasks(), &sample_budget()).to_string();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn sitebook() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sitebook"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn tasks_text_output() {
    let snapshot = snapshot_file();

    sitebook()
        .args(["tasks", "--snapshot"])
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "War Room: 6 tasks, 2 overdue, 1 waiting on me, 2 blocking",
        ));
}

#[test]
fn tasks_json_respects_filter_and_sort() {
    let snapshot = snapshot_file();

    let output = sitebook()
        .args(["tasks", "--status", "overdue", "--sort", "priority", "--json", "--snapshot"])
        .arg(snapshot.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["t5", "t3"]);
    assert_eq!(json["stats"]["total"], 6);
}

#[test]
fn unknown_sort_mode_fails() {
    let snapshot = snapshot_file();

    sitebook()
        .args(["tasks", "--sort", "fastest", "--snapshot"])
        .arg(snapshot.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort mode"));
}

#[test]
fn failure_is_reported_once() {
    let snapshot = snapshot_file();

    let output = sitebook()
        .args(["tasks", "--sort", "fastest", "--snapshot"])
        .arg(snapshot.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("unknown sort mode").count(), 1);
    assert_eq!(stderr.matches("error: ").count(), 1);
}

#[test]
fn budget_scoped_json() {
    let snapshot = snapshot_file();

    let output = sitebook()
        .args(["budget", "--project", "p2", "--json", "--snapshot"])
        .arg(snapshot.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["budgetByProject"].as_array().unwrap().len(), 1);
    assert_eq!(json["quotesByTrade"][0]["trade"], "Plumbing");
    assert_eq!(json["percentQuoted"], 100);
}

#[test]
fn budget_scope_from_config_file() {
    let snapshot = snapshot_file();
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"budget_scope = \"p1\"\n").unwrap();

    sitebook()
        .args(["budget", "--snapshot"])
        .arg(snapshot.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbor House"))
        .stdout(predicate::str::contains("Alder Court").not());
}

#[test]
fn search_text_output() {
    let snapshot = snapshot_file();

    sitebook()
        .args(["search", "electrical", "--snapshot"])
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Quotes:"))
        .stdout(predicate::str::contains("q2"));
}

#[test]
fn search_without_hits() {
    let snapshot = snapshot_file();

    sitebook()
        .args(["search", "skylight", "--snapshot"])
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout("No matches\n");
}

#[test]
fn malformed_snapshot_names_the_row() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"quotes": [{"id": 1}]}"#).unwrap();

    sitebook()
        .args(["budget", "--snapshot"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote row at index 0"));
}

#[test]
fn missing_snapshot_file_fails() {
    sitebook()
        .args(["budget", "--snapshot", "/nonexistent/snapshot.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
