// Integration tests for the interest-report CLI surface.
//
// These invoke the binary with assert_cmd and check argument handling.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the interest-report binary.
fn interest_report() -> Command {
    Command::cargo_bin("interest-report").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    interest_report()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("interest-report"));
}

#[test]
fn cli_help_flag() {
    interest_report()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holland interest inventory"));
}

#[test]
fn generate_requires_workbook() {
    interest_report()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_and_verbose_conflict() {
    interest_report()
        .args(["-q", "-v", "check", "/tmp/workbook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn generate_rejects_unknown_format() {
    interest_report()
        .args(["generate", "/tmp/workbook", "--format", "docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
