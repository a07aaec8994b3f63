//! Integration tests for correcting parsed entries

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{climblog_cmd, imported_log};

#[test]
fn test_correct_route() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-15", "1", "--route", "Weevil"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Weevil: 12a (manual)"));

    climblog_cmd()
        .current_dir(temp.path())
        .args(["show", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Weevil: 12a (manual)"));
}

#[test]
fn test_correct_route_remembers_alias() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-15", "1", "--route", "Weevil", "--remember-alias"])
        .assert()
        .success();

    climblog_cmd()
        .current_dir(temp.path())
        .args(["parse", "Qwxzv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weevil: 12a (exact)"));
}

#[test]
fn test_correct_attempts() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "6/1/2024", "0", "--attempts", "TA=2hc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("events:  AS, TA (hang), TA"));
}

#[test]
fn test_correct_bad_attempts() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-01", "0", "--attempts", "TA=3hc"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("announces 3 attempts but lists 2"));
}

#[test]
fn test_correct_not_a_climb() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-15", "1", "--not-a-climb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not a climb)"))
        .stdout(predicate::str::contains("* review").not());
}

#[test]
fn test_correct_requires_a_fix() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-15", "1"])
        .assert()
        .failure();
}

#[test]
fn test_correct_index_out_of_range() {
    let temp = TempDir::new().unwrap();
    imported_log(temp.path());

    climblog_cmd()
        .current_dir(temp.path())
        .args(["correct", "2024-06-15", "9", "--not-a-climb"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Entry 9 does not exist"));
}
