//! CLI interaction tests
//!
//! These tests exercise the argument surface without touching the
//! network: usage errors, argument validation, and help output.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("ulp").unwrap()
}

/// Test that a missing target is a usage error
#[test]
fn test_missing_target_is_usage_error() {
    create_test_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test that a non-integer round count is rejected by the parser
#[test]
fn test_non_integer_rounds_rejected() {
    create_test_cmd()
        .arg("127.0.0.1")
        .arg("many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Test that a negative round count is rejected by the parser
#[test]
fn test_negative_rounds_rejected() {
    create_test_cmd()
        .arg("127.0.0.1")
        .arg("--")
        .arg("-5")
        .assert()
        .failure();
}

/// Test that zero rounds fails validation with a configuration error
#[test]
fn test_zero_rounds_fails_validation() {
    create_test_cmd()
        .arg("127.0.0.1")
        .arg("0")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Round count must be at least 1"));
}

/// Test that --help describes the probe
#[test]
fn test_help_describes_the_probe() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("echo endpoint"))
        .stdout(predicate::str::contains("TARGET"))
        .stdout(predicate::str::contains("ROUNDS"));
}

/// Test that --version reports the package version
#[test]
fn test_version_flag() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
