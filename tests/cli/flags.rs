//! Tests for CLI flags and logging controls.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_variables() {
    Test::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecr-login"))
        .stdout(predicate::str::contains("REGISTRY"));
}

#[test]
fn test_version_flag() {
    Test::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_fails() {
    let output = Test::configured().cmd().arg("--bogus").output().unwrap();
    assert!(!output.status.success());
    assert_stdout_empty(&output);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = Test::configured()
        .var("REGION", "Bad")
        .cmd()
        .arg("--verbose")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stdout_empty(&output);
    assert_stderr_contains(&output, "configuration resolved");
}

#[test]
fn test_default_has_no_debug_output() {
    let output = Test::configured().var("REGION", "Bad").run();

    assert_failure(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("configuration resolved"),
        "default mode should not show debug output: {}",
        err
    );
}

#[test]
fn test_log_env_var_overrides_verbose() {
    let output = Test::configured()
        .var("REGION", "Bad")
        .var("ECR_LOGIN_LOG", "ecr_login=debug")
        .run();

    assert_failure(&output);
    assert_stderr_contains(&output, "configuration resolved");
}
