//! CLI integration tests for the demo binaries
//!
//! These run the `calc` and `app` executables end to end: argument
//! vector in, stdout/stderr text and exit code out.

use predicates::prelude::*;

fn calc_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("calc"))
}

fn app_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("app"))
}

// =============================================================================
// Calculator
// =============================================================================

#[test]
fn test_calc_add() {
    calc_cmd()
        .args(["add", "10", "20"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn test_calc_base_and_verbose_options() {
    calc_cmd()
        .args(["--base=16", "--verbose", "multiply", "10", "10"])
        .assert()
        .success()
        .stdout("16 * 16 = 256\n");
}

#[test]
fn test_calc_hex_operands_are_rejected() {
    calc_cmd()
        .args(["--base=16", "add", "a", "f"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: a is not a valid int32"))
        .stderr(predicate::str::contains("Usage: calc [options] <command>"));
}

#[test]
fn test_calc_large_operands_do_not_overflow() {
    calc_cmd()
        .args(["--base=36", "multiply", "2147483647", "2147483647"])
        .assert()
        .success()
        .stdout("42547301689866087936330555601\n");

    calc_cmd()
        .args(["--base=36", "add", "2147483647", "2147483647"])
        .assert()
        .success()
        .stdout("412539945653102\n");
}

#[cfg(unix)]
#[test]
fn test_calc_non_utf8_argument_fails_with_help() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    calc_cmd()
        .arg(OsStr::from_bytes(b"add\xff"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a valid command"))
        .stderr(predicate::str::contains("Usage: calc [options] <command>"));
}

#[test]
fn test_calc_arity_mismatch() {
    calc_cmd()
        .args(["add", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("add requires 2 argument(s), got 1"));
}

#[test]
fn test_calc_unknown_option() {
    calc_cmd()
        .args(["--radix=2", "add", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The option --radix is not a recognized option",
        ));
}

#[test]
fn test_calc_missing_option_value() {
    calc_cmd()
        .args(["--base", "add", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value passed for option --base"));
}

#[test]
fn test_calc_empty_invocation_shows_help() {
    calc_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: calc [options] <command>"))
        .stdout(predicate::str::contains("add <int32> <int32>"))
        .stdout(predicate::str::contains("multiply <int32> <int32>"))
        .stdout(predicate::str::contains("--base"))
        .stdout(predicate::str::contains("radix the operand digits are read in"));
}

// =============================================================================
// Nested application
// =============================================================================

#[test]
fn test_app_empty_invocation_lists_commands() {
    app_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("reload"))
        .stdout(predicate::str::contains("kill"))
        .stdout(predicate::str::contains("database ..."));
}

#[test]
fn test_app_nested_group_create() {
    app_cmd()
        .args(["database", "create"])
        .assert()
        .success()
        .stdout("Creating database.\n");
}

#[test]
fn test_app_nested_group_option() {
    app_cmd()
        .args(["database", "--path=app.db", "create"])
        .assert()
        .success()
        .stdout("Creating database at app.db.\n");
}

#[test]
fn test_app_port_option_is_observed() {
    app_cmd()
        .args(["--port=9090", "start"])
        .assert()
        .success()
        .stdout("Listening app at 9090.\n");
}

#[test]
fn test_app_default_port() {
    app_cmd()
        .arg("start")
        .assert()
        .success()
        .stdout("Listening app at 8080.\n");
}

#[test]
fn test_app_unknown_command() {
    app_cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: unknown-command is not a valid command",
        ))
        .stderr(predicate::str::contains("Usage: app [options] <command>"));
}

#[test]
fn test_app_nested_failure_shows_nested_help() {
    app_cmd()
        .args(["database", "migrate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("migrate is not a valid command"))
        .stderr(predicate::str::contains("Usage: app database [options] <command>"))
        .stderr(predicate::str::contains("create"));
}

#[test]
fn test_app_nested_group_without_command_shows_group_help() {
    app_cmd()
        .arg("database")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: app database [options] <command>"));
}

#[test]
fn test_app_logging_goes_to_stderr() {
    app_cmd()
        .env("SIMPLECLI_LOG", "simplecli=debug")
        .arg("reload")
        .assert()
        .success()
        .stdout("Reloading app.\n")
        .stderr(predicate::str::contains("invoking operation"));
}
