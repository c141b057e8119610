//! Tests for configuration failures reported by the binary.
//!
//! None of these reach the network: configuration and session checks fail
//! before any request is sent.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_each_missing_variable_is_named() {
    for name in ["KEY", "SECRET", "REGION", "REGISTRY"] {
        let output = Test::configured().without(name).run();

        assert_failure(&output);
        assert_stdout_empty(&output);
        assert_stderr_contains(&output, &format!("Invalid parameter for {}", name));
        assert_stderr_contains(&output, &format!("export {} before running", name));
    }
}

#[test]
fn test_empty_variable_counts_as_missing() {
    let output = Test::configured().var("SECRET", "").run();

    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "Invalid parameter for SECRET");
}

#[test]
fn test_nothing_set_reports_key_first() {
    let output = Test::new().run();

    assert_failure(&output);
    let err = stderr(&output);
    assert!(err.contains("Invalid parameter for KEY"), "got: {}", err);
    assert!(!err.contains("SECRET"), "only the first failure is reported: {}", err);
}

#[test]
fn test_malformed_region_is_session_failure() {
    Test::configured()
        .var("REGION", "US East")
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("session failure"))
        .stderr(predicate::str::contains("invalid region 'US East'"));
}

#[test]
fn test_secret_never_printed_on_failure() {
    let output = Test::configured()
        .var("SECRET", "very-secret-value")
        .var("REGION", "bad region")
        .cmd()
        .arg("--verbose")
        .output()
        .unwrap();

    assert_failure(&output);
    assert!(!stderr(&output).contains("very-secret-value"));
}
