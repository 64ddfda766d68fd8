//! Behavioral specifications for the taboo CLI.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;

// =============================================================================
// COMMAND SPECS
// =============================================================================

#[test]
fn bare_invocation_shows_help() {
    taboo_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn help_exits_successfully() {
    taboo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("taboo"));
}

#[test]
fn version_exits_successfully() {
    taboo_cmd().arg("--version").assert().success();
}

#[test]
fn unknown_command_fails() {
    taboo_cmd()
        .arg("unknown")
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unrecognized|unknown)").unwrap());
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn check_clean_text_exits_zero() {
    taboo_cmd()
        .args(["--words", "spam", "check", "all clear"])
        .assert()
        .success()
        .stdout(predicates::str::contains("clean"));
}

#[test]
fn check_dirty_text_exits_one() {
    taboo_cmd()
        .args(["--words", "spam", "check", "this is spam"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("match: spam"));
}

#[test]
fn check_strips_noise_before_matching() {
    taboo_cmd()
        .args(["--words", "bad", "check", "b|a d"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("match: bad"));
}

#[test]
fn check_reads_stdin_when_no_operand() {
    taboo_cmd()
        .args(["--words", "spam", "check"])
        .write_stdin("spam in a pipe\n")
        .assert()
        .code(1);
}

#[test]
fn check_wildcard_matches_any_code_point() {
    // '?' stays outside the default noise class.
    taboo_cmd()
        .args(["--words", "abc", "check", "--wildcard", "?", "a?c"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("a?c"));
}

#[test]
fn check_with_wordlist_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = wordlist(&dir, &["spam", "scam"]);

    taboo_cmd()
        .arg("-w")
        .arg(&path)
        .args(["check", "a scam"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("match: scam"));
}

#[test]
fn missing_wordlist_exits_two() {
    taboo_cmd()
        .args(["-w", "no/such/wordlist.txt", "check", "x"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("wordlist error"));
}

#[test]
fn malformed_noise_pattern_exits_two() {
    taboo_cmd()
        .args(["--words", "spam", "--noise", "[oops", "check", "x"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid noise pattern"));
}

// =============================================================================
// SCAN
// =============================================================================

#[test]
fn scan_lists_matches_in_order() {
    taboo_cmd()
        .args(["--words", "spam,scam", "scan", "this is spam and a scam"])
        .assert()
        .code(1)
        .stdout(predicates::str::diff("spam\nscam\n"));
}

#[test]
fn scan_clean_text_prints_clean() {
    taboo_cmd()
        .args(["--words", "spam", "scan", "nothing here"])
        .assert()
        .success()
        .stdout(predicates::str::contains("clean"));
}

#[test]
fn scan_json_output_parses() {
    let output = taboo_cmd()
        .args(["--words", "spam", "scan", "-o", "json", "some spam"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["clean"], serde_json::json!(false));
    assert_eq!(value["matches"], serde_json::json!(["spam"]));
}

// =============================================================================
// MASK / STRIP / DENOISE
// =============================================================================

#[test]
fn mask_replaces_code_point_for_code_point() {
    taboo_cmd()
        .args(["--words", "spam", "mask", "no spam here"])
        .assert()
        .success()
        .stdout(predicates::str::diff("no **** here\n"));
}

#[test]
fn mask_char_is_configurable() {
    taboo_cmd()
        .args(["--words", "spam", "mask", "-c", "#", "spam"])
        .assert()
        .success()
        .stdout(predicates::str::diff("####\n"));
}

#[test]
fn mask_does_not_strip_noise() {
    taboo_cmd()
        .args(["--words", "bad", "mask", "b|a d"])
        .assert()
        .success()
        .stdout(predicates::str::diff("b|a d\n"));
}

#[test]
fn strip_removes_matches() {
    taboo_cmd()
        .args(["--words", "spam", "strip", "no spam here"])
        .assert()
        .success()
        .stdout(predicates::str::diff("no  here\n"));
}

#[test]
fn denoise_strips_noise_only() {
    taboo_cmd()
        .args(["denoise", "b|a d"])
        .assert()
        .success()
        .stdout(predicates::str::diff("bad\n"));
}

#[test]
fn denoise_honors_noise_override() {
    taboo_cmd()
        .args(["--noise", "[-]+", "denoise", "b-a-d b|c"])
        .assert()
        .success()
        .stdout(predicates::str::diff("bad b|c\n"));
}

// =============================================================================
// COMPLETIONS
// =============================================================================

#[test]
fn completions_prints_a_script() {
    taboo_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("taboo"));
}
