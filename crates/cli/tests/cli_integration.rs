//! CLI integration tests: help, version, and argument validation.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    cargo_bin_cmd!("calc")
}

#[test]
fn help_exits_0_with_description() {
    calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator HTTP API"));
}

#[test]
fn version_exits_0() {
    calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"));
}

#[test]
fn serve_help_lists_options() {
    calc()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--cors-origin"))
        .stdout(predicate::str::contains("--history-capacity"));
}

#[test]
fn missing_subcommand_fails() {
    calc().assert().failure();
}

#[test]
fn non_numeric_port_fails() {
    calc()
        .args(["serve", "--port", "eighty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn bind_failure_exits_1() {
    calc()
        .args(["serve", "--host", "not-a-host.invalid", "--port", "1"])
        .assert()
        .code(1);
}

#[test]
fn zero_history_capacity_is_rejected() {
    calc()
        .args(["serve", "--history-capacity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--history-capacity"));
}

#[test]
fn oversized_history_capacity_is_rejected() {
    calc()
        .args(["serve", "--history-capacity", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--history-capacity"));
}
