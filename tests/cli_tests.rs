//! Integration tests for the add/list/delete/clear commands

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;
use common::dreamlog_cmd;

fn journal_arg(temp: &TempDir) -> (String, PathBuf) {
    let path = temp.path().join("dreams.json");
    (path.to_string_lossy().into_owned(), path)
}

#[test]
fn test_list_empty_journal() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_add_then_list() {
    let temp = TempDir::new().unwrap();
    let (journal, path) = journal_arg(&temp);

    dreamlog_cmd()
        .args([
            "--journal",
            &journal,
            "add",
            "I was flying over the ocean",
            "--date",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry for 2025-01-15"));

    assert!(path.exists());

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2025-01-15] I was flying over the ocean"));
}

#[test]
fn test_list_most_recent_first() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    for (text, date) in [("older", "2025-01-10"), ("newer", "2025-01-20")] {
        dreamlog_cmd()
            .args(["--journal", &journal, "add", text, "--date", date])
            .assert()
            .success();
    }

    let output = dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("newer"));
    assert!(lines[1].contains("older"));
}

#[test]
fn test_list_filtered_by_date() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    for (text, date) in [("one", "2025-01-10"), ("two", "2025-01-20")] {
        dreamlog_cmd()
            .args(["--journal", &journal, "add", text, "--date", date])
            .assert()
            .success();
    }

    dreamlog_cmd()
        .args(["--journal", &journal, "list", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("two").not());
}

#[test]
fn test_add_rejects_bad_date_format() {
    let temp = TempDir::new().unwrap();
    let (journal, path) = journal_arg(&temp);

    dreamlog_cmd()
        .args(["--journal", &journal, "add", "a dream", "--date", "15-01-2025"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date format"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    assert!(!path.exists());
}

#[test]
fn test_add_rejects_future_date() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    dreamlog_cmd()
        .args(["--journal", &journal, "add", "a dream", "--date", "2099-01-01"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("future"));
}

#[test]
fn test_delete_entry() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    for (text, date) in [("first", "2025-01-10"), ("second", "2025-01-11")] {
        dreamlog_cmd()
            .args(["--journal", &journal, "add", text, "--date", date])
            .assert()
            .success();
    }

    dreamlog_cmd()
        .args(["--journal", &journal, "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 1"))
        .stdout(predicate::str::contains("first"));

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    dreamlog_cmd()
        .args(["--journal", &journal, "add", "only", "--date", "2025-01-10"])
        .assert()
        .success();

    dreamlog_cmd()
        .args(["--journal", &journal, "delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry found at number 5"));

    // Nothing was removed
    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("only"));
}

#[test]
fn test_clear_requires_force() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    dreamlog_cmd()
        .args(["--journal", &journal, "add", "a dream", "--date", "2025-01-10"])
        .assert()
        .success();

    dreamlog_cmd()
        .args(["--journal", &journal, "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a dream"));
}

#[test]
fn test_clear_with_force() {
    let temp = TempDir::new().unwrap();
    let (journal, _) = journal_arg(&temp);

    for (text, date) in [("first", "2025-01-10"), ("second", "2025-01-11")] {
        dreamlog_cmd()
            .args(["--journal", &journal, "add", text, "--date", date])
            .assert()
            .success();
    }

    dreamlog_cmd()
        .args(["--journal", &journal, "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 entries"));

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_journal_path_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env-dreams.json");

    let mut cmd = dreamlog_cmd();
    cmd.env("DREAMLOG_JOURNAL", &path)
        .args(["add", "a dream from the env journal", "--date", "2025-01-10"])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn test_corrupted_journal_backed_up_on_load() {
    let temp = TempDir::new().unwrap();
    let (journal, path) = journal_arg(&temp);

    fs::write(&path, "{ not valid json").unwrap();

    dreamlog_cmd()
        .args(["--journal", &journal, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    let backup = temp.path().join("dreams.json.backup");
    assert_eq!(fs::read_to_string(backup).unwrap(), "{ not valid json");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}
