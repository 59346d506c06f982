//! Smoke tests for the form-analyzer binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn form_analyzer() -> Command {
    let mut cmd = Command::cargo_bin("form-analyzer").expect("form-analyzer binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

const ADA: [&str; 13] = [
    "analyze",
    "--name",
    "Ada",
    "--number",
    "7",
    "--sentence",
    "Hi There",
    "--tag",
    "apple",
    "--tag",
    "pear",
    "--tag",
    "fig",
];

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    form_analyzer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    form_analyzer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("countdown"));
}

#[test]
fn test_no_args_fails() {
    form_analyzer().assert().failure();
}

// ============================================================================
// Analyze
// ============================================================================

#[test]
fn test_analyze_text() {
    form_analyzer()
        .args(["--color", "never"])
        .args(ADA)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ada!"))
        .stdout(predicate::str::contains("49"))
        .stdout(predicate::str::contains("6.00"))
        .stdout(predicate::str::contains("HI THERE"))
        .stdout(predicate::str::contains("🍎 fig"));
}

#[test]
fn test_analyze_json() {
    let output = form_analyzer()
        .args(ADA)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["arithmetic"]["sum"], 49.0);
    assert_eq!(value["sequence"].as_array().unwrap().len(), 7);
    assert_eq!(value["condition"]["classification"], "Positive");
}

#[test]
fn test_analyze_negative_number() {
    form_analyzer()
        .args(["--color", "never", "analyze", "--name", "Ada", "--number", "-4"])
        .args(["--sentence", "x", "--tag", "a", "--tag", "b", "--tag", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The number is negative"))
        .stdout(predicate::str::contains("No numbers to display"));
}

#[test]
fn test_analyze_blank_field_fails() {
    form_analyzer()
        .args(["analyze", "--name", "Ada", "--number", "7", "--tag", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid sentence"));
}

#[test]
fn test_analyze_non_numeric_fails() {
    form_analyzer()
        .args(["analyze", "--name", "Ada", "--number", "abc", "--sentence", "x"])
        .args(["--tag", "a", "--tag", "b", "--tag", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn test_analyze_too_many_tags_fails() {
    form_analyzer()
        .args(ADA)
        .args(["--tag", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ============================================================================
// Countdown and Config
// ============================================================================

#[test]
fn test_countdown() {
    form_analyzer()
        .args(["countdown", "--from", "2"])
        .assert()
        .success()
        .stdout("2\n1\n0\n");
}

#[test]
fn test_config_defaults() {
    form_analyzer()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_number: 42"))
        .stdout(predicate::str::contains("sequence_cap: 20"));
}

#[test]
fn test_config_file_applies() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("form-analyzer.yaml");
    fs::write(&path, "format: json\nbase_number: 10\n").unwrap();

    let output = form_analyzer()
        .arg("--config")
        .arg(&path)
        .args(ADA)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["arithmetic"]["sum"], 17.0);
}

#[test]
fn test_config_file_missing() {
    form_analyzer()
        .args(["--config", "/nonexistent/form-analyzer.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_quiet_suppresses_output() {
    form_analyzer()
        .arg("-q")
        .args(ADA)
        .assert()
        .success()
        .stdout("");
}
