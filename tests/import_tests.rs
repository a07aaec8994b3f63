//! Integration tests for import, show and list

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{climblog_cmd, imported_log, seeded_log};

#[test]
fn test_import_reports_summary() {
    let temp = TempDir::new().unwrap();
    seeded_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "log.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 3 days (5 climbs, 2 to review), skipped 0 already stored",
        ));

    assert!(temp.path().join("days/2024-06-01.toml").exists());
    assert!(temp.path().join("days/2024-06-15.toml").exists());
    assert!(temp.path().join("days/2024-07-02.toml").exists());
    // Gym day is filtered out by place
    assert!(!temp.path().join("days/2024-06-08.toml").exists());
}

#[test]
fn test_import_twice_skips_stored_days() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "log.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 days"))
        .stdout(predicate::str::contains("skipped 3"));

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "log.csv", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 days"));
}

#[test]
fn test_import_date_prefix() {
    let temp = TempDir::new().unwrap();
    seeded_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "log.csv", "--date", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 days"));
}

#[test]
fn test_import_without_place_filter() {
    let temp = TempDir::new().unwrap();
    seeded_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["config", "place_filter", ""])
        .assert()
        .success();

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "log.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 days"));
}

#[test]
fn test_import_missing_file() {
    let temp = TempDir::new().unwrap();
    seeded_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["import", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_stored_day_is_toml() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    let content = fs::read_to_string(temp.path().join("days/2024-06-15.toml")).unwrap();
    assert!(content.contains("date = \"2024-06-15\""));
    assert!(content.contains("[[climb_entries]]"));
    assert!(content.contains("resolution = \"exact\""));
    assert!(content.contains("resolution = \"unresolved\""));
}

#[test]
fn test_show_day() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-15  Rumney TA AS"))
        .stdout(predicate::str::contains("[0] Centerpiece: 10d (exact)"))
        .stdout(predicate::str::contains("[1] Qwxzv: ? (unresolved"));
}

#[test]
fn test_show_accepts_sheet_dates() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "7/2/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weevil: 12a"))
        .stdout(predicate::str::contains("events:  AS (hang)"));
}

#[test]
fn test_show_highlights_entry() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "2024-06-15", "--entry", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1mQwxzv\x1b[0m"))
        .stdout(predicate::str::contains("name_approx: Qwxzv"));
}

#[test]
fn test_show_missing_day() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "2023-01-01"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No climbing day stored for 2023-01-01"));
}

#[test]
fn test_show_invalid_date() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "yesterday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_list_newest_first() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    let output = climblog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let dates: Vec<&str> = stdout.lines().map(|l| &l[..10]).collect();
    assert_eq!(dates, vec!["2024-07-02", "2024-06-15", "2024-06-01"]);
}

#[test]
fn test_list_range_and_limit() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "2024-06-10", "--to", "2024-06-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-15"))
        .stdout(predicate::str::contains("2024-06-01").not())
        .stdout(predicate::str::contains("2024-07-02").not());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-07-02"))
        .stdout(predicate::str::contains("2024-06-15").not());
}
