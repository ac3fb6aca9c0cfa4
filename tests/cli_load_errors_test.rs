//! Load failures exit 1 with a message on stderr.

mod common;

use common::TestDoc;
use predicates::prelude::*;

#[test]
fn test_missing_file() {
    TestDoc::empty()
        .fv()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: features.json not found"))
        .stderr(predicate::str::contains("Run from a directory containing features.json"));
}

#[test]
fn test_missing_explicit_path() {
    TestDoc::empty()
        .fv()
        .arg("nowhere/tracking.json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nowhere/tracking.json not found"));
}

#[test]
fn test_malformed_json() {
    TestDoc::with("[{\"id\": \"a\",")
        .fv()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_not_an_array() {
    TestDoc::with(r#"{"id": "a"}"#)
        .fv()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing"));
}

#[test]
fn test_missing_id() {
    TestDoc::with(r#"[{"id": "a"}, {"status": "done"}]"#)
        .fv()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required field 'id'"))
        .stderr(predicate::str::contains("(entry 1)"));
}

#[test]
fn test_unknown_status_still_renders() {
    TestDoc::with(r#"[{"id": "a", "status": "blocked"}]"#)
        .fv()
        .args(["--width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/1"));
}

#[test]
fn test_null_status_is_not_pending() {
    TestDoc::with(r#"[{"id": "a", "status": null}]"#)
        .fv()
        .args(["--width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All complete"));
}
