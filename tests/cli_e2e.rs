#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TODAY: &str = "2024-05-01";

fn docwatch_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("docwatch"));
    cmd.env("DOCWATCH_DATA", data_dir.as_os_str())
        .env("DOCWATCH_TODAY", TODAY)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, name: &str, expiry: &str, lead: &str) {
    docwatch_cmd(data_dir)
        .args(["add", name, expiry, "--lead-days", lead])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document added"));
}

fn stored(data_dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.join("documentos.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_empty_listing() {
    let temp = TempDir::new().unwrap();
    docwatch_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents registered."));

    docwatch_cmd(temp.path())
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents expired or in warning."));
}

#[test]
fn test_add_list_and_alerts() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Passport", "2030-01-01", "60");
    add(temp.path(), "Old visa", "2024-04-01", "10");
    add(temp.path(), "Lease", "2024-05-08", "10");

    let out = docwatch_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Old visa") && lines[0].contains("Expired"));
    assert!(lines[1].contains("Lease") && lines[1].contains("Warning"));
    assert!(lines[2].contains("Passport") && lines[2].contains("OK"));

    docwatch_cmd(temp.path())
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old visa"))
        .stdout(predicate::str::contains("Lease"))
        .stdout(predicate::str::contains("Passport").not());
}

#[test]
fn test_add_uses_configured_default_lead_days() {
    let temp = TempDir::new().unwrap();
    docwatch_cmd(temp.path())
        .args(["config", "default-lead-days", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-lead-days set to 12"));

    docwatch_cmd(temp.path())
        .args(["add", "Permit", "2025-01-01"])
        .assert()
        .success();

    assert_eq!(stored(temp.path())[0]["alerta"], 12);
}

#[test]
fn test_add_rejects_invalid_input() {
    let temp = TempDir::new().unwrap();
    docwatch_cmd(temp.path())
        .args(["add", "   ", "2030-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document name cannot be empty"));

    docwatch_cmd(temp.path())
        .args(["add", "Visa", "2030-01-01", "--lead-days=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Alert lead time"));

    docwatch_cmd(temp.path())
        .args(["add", "Visa", "2030-13-01"])
        .assert()
        .failure();

    assert!(!temp.path().join("documentos.json").exists());
}

#[test]
fn test_search() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "My Document", "2030-01-01", "5");
    add(temp.path(), "Passport", "2029-01-01", "5");

    docwatch_cmd(temp.path())
        .args(["search", "doc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. My Document"))
        .stdout(predicate::str::contains("Passport").not());

    docwatch_cmd(temp.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents match"));

    docwatch_cmd(temp.path())
        .args(["search", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search term cannot be empty"));
}

#[test]
fn test_edit_commit_and_discard() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Permit", "2024-05-08", "5");

    // Declined: nothing changes on disk
    let before = fs::read_to_string(temp.path().join("documentos.json")).unwrap();
    docwatch_cmd(temp.path())
        .args(["edit", "1", "--name", "Renamed"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes discarded."));
    let after = fs::read_to_string(temp.path().join("documentos.json")).unwrap();
    assert_eq!(before, after);

    // Confirmed: status moves from OK to Warning
    docwatch_cmd(temp.path())
        .args(["edit", "1", "--lead-days", "10"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"))
        .stdout(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("Document updated: Permit"));
    assert_eq!(stored(temp.path())[0]["alerta"], 10);

    docwatch_cmd(temp.path())
        .args(["edit", "1", "--lead-days=-3", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Alert lead time"));
    assert_eq!(stored(temp.path())[0]["alerta"], 10);
}

#[test]
fn test_remove_with_confirmation() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Keep", "2030-01-01", "5");
    add(temp.path(), "Drop", "2025-01-01", "5");

    docwatch_cmd(temp.path())
        .args(["rm", "1"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));
    assert_eq!(stored(temp.path()).as_array().unwrap().len(), 2);

    docwatch_cmd(temp.path())
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document removed (1): Drop"));

    let docs = stored(temp.path());
    assert_eq!(docs.as_array().unwrap().len(), 1);
    assert_eq!(docs[0]["nome"], "Keep");

    docwatch_cmd(temp.path())
        .args(["rm", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document not found"));
}

#[test]
fn test_clear() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "A", "2030-01-01", "5");
    add(temp.path(), "B", "2031-01-01", "5");

    docwatch_cmd(temp.path())
        .arg("clear")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    docwatch_cmd(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 document(s)."));
    assert_eq!(stored(temp.path()), serde_json::json!([]));
}

#[test]
fn test_corrupt_store_fails_without_rewriting() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("documentos.json");
    fs::write(&path, r#"[{"nome": "RG", "validade": "not a date", "alerta": 1}]"#).unwrap();

    docwatch_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupt"));

    docwatch_cmd(temp.path())
        .args(["add", "New", "2030-01-01"])
        .assert()
        .failure();

    assert!(fs::read_to_string(&path).unwrap().contains("not a date"));

    // Config still works so the store can be pointed elsewhere
    docwatch_cmd(temp.path())
        .args(["config", "store-file", "fresh.json"])
        .assert()
        .success();
    docwatch_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents registered."));
}
