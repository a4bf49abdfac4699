//! CLI integration tests
//!
//! Runs the compiled binary end to end for the non-interactive
//! commands, pointing the ledger at a temporary file.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_all_subcommands() {
    let mut cmd = Command::cargo_bin("joojit").expect("binary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("sessions"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn sessions_list_on_fresh_ledger_reports_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger_path = dir.path().join("ledger.json");

    let mut cmd = Command::cargo_bin("joojit").expect("binary");
    cmd.env("JOOJIT_LEDGER_PATH", &ledger_path)
        .args(["sessions", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions found."));
}

#[test]
fn sessions_clear_with_yes_creates_a_fresh_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger_path = dir.path().join("ledger.json");

    let mut cmd = Command::cargo_bin("joojit").expect("binary");
    cmd.env("JOOJIT_LEDGER_PATH", &ledger_path)
        .args(["sessions", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All sessions cleared."));

    let contents = std::fs::read_to_string(&ledger_path).expect("ledger written");
    let store: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert!(store["activeSession"].is_string());
}

#[test]
fn unknown_panel_override_is_rejected() {
    let mut cmd = Command::cargo_bin("joojit").expect("binary");
    cmd.args(["chat", "--panel", "vortex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown panel"));
}
