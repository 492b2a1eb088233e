//! Smoke tests for the keycalc binary

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("KEYCALC_FORMAT").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_lists_subcommands() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("keys"))
        .stdout(predicate::str::contains("repl"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_priority() {
    keycalc()
        .args(["eval", "3+4*2"])
        .assert()
        .success()
        .stdout("11\n");
}

#[test]
fn test_eval_single_level_lookahead() {
    keycalc()
        .args(["eval", "1+2*3*4"])
        .assert()
        .success()
        .stdout("28\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "5/0"])
        .assert()
        .success()
        .stdout("To infinity, and beyond!\n");
}

#[test]
fn test_eval_json_format() {
    keycalc()
        .args(["--format", "json", "eval", "2/3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display":"0.66666667""#))
        .stdout(predicate::str::contains(r#""kind":"value""#));
}

#[test]
fn test_eval_format_from_env() {
    keycalc()
        .env("KEYCALC_FORMAT", "json")
        .args(["eval", "1+1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_eval_unknown_key_warns() {
    keycalc()
        .args(["eval", "2x3"])
        .assert()
        .success()
        .stdout("23\n")
        .stderr(predicate::str::contains("ignoring unknown key"));
}

#[test]
fn test_eval_strict_rejects_unknown_key() {
    keycalc()
        .args(["--strict", "eval", "2x3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_eval_trace() {
    keycalc()
        .args(["--trace", "eval", "6*7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 * 7"))
        .stdout(predicate::str::ends_with("42\n"));
}

#[test]
fn test_fraction_digits_flag() {
    keycalc()
        .args(["--fraction-digits", "3", "eval", "2/3"])
        .assert()
        .success()
        .stdout("0.667\n");
}

#[test]
fn test_fraction_digits_out_of_range_is_rejected() {
    keycalc()
        .args(["--fraction-digits", "18446744073709551615", "eval", "2/3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_config_file_huge_fraction_digits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.json");
    fs::write(&path, r#"{"fraction_digits": 1000000000000}"#).unwrap();

    keycalc()
        .args(["--config", path.to_str().unwrap(), "eval", "2/3"])
        .assert()
        .success()
        .stdout("0.6666666666666666\n");
}

#[test]
fn test_eval_negative_fraction_cut_to_zero() {
    keycalc()
        .args(["eval", "0-0.05"])
        .assert()
        .success()
        .stdout("0\n");
}

// ============================================================================
// keys
// ============================================================================

#[test]
fn test_keys_with_backspace() {
    keycalc()
        .args(["keys", "1", "2", "Backspace", "+", "5", "="])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_keys_escape_clears() {
    keycalc()
        .args(["keys", "9", "Escape", "4", "Enter"])
        .assert()
        .success()
        .stdout("4\n");
}

// ============================================================================
// repl
// ============================================================================

#[test]
fn test_repl_reads_stdin() {
    keycalc()
        .arg("repl")
        .write_stdin("2+2=\n+3=\n")
        .assert()
        .success()
        .stdout("4\n7\n");
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.json");
    fs::write(
        &path,
        r#"{"fraction_digits": 2, "infinity_text": "overflow"}"#,
    )
    .unwrap();

    keycalc()
        .args(["--config", path.to_str().unwrap(), "repl"])
        .write_stdin("2/3=\nc1/0=\n")
        .assert()
        .success()
        .stdout("0.67\noverflow\n");
}

#[test]
fn test_config_file_missing() {
    keycalc()
        .args(["--config", "/nonexistent/keycalc.json", "eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
