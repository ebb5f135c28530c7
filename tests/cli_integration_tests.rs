//! Integration tests for top-level CLI behavior.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands_and_exit_codes() {
    chronos_timemap!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn version_flag() {
    chronos_timemap!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    chronos_timemap!()
        .arg("explode")
        .assert()
        .code(2);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::new();

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["render", "--no-config", "-v", "--color", "never"])
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("starting render"));
}

#[test]
fn no_color_env_disables_ansi() {
    let fixture = TestFixture::new();

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["render", "--no-config"])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b[").not());
}
