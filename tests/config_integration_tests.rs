//! Integration tests for the `config` command.

mod common;

use common::{SVG_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(SVG_CONFIG);

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", SVG_CONFIG);

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .success();
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("invalid [[[ toml");

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TomlParse"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_rejects_unsupported_format() {
    let fixture = TestFixture::new();
    fixture.create_config("[output]\npath = \"timemap.gif\"\n");

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("output.path"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_defaults_as_text() {
    let fixture = TestFixture::new();

    chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "show", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Effective Configuration ==="))
        .stdout(predicate::str::contains("path = \"profiler/ChronosProfile.csv\""))
        .stdout(predicate::str::contains("title = \"Function Heatmap\""));
}

#[test]
fn config_show_local_config_as_json() {
    let fixture = TestFixture::new();
    fixture.create_config(SVG_CONFIG);

    let output = chronos_timemap!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["output"]["path"], "timemap.svg");
    assert_eq!(json["output"]["width"], 800);
    assert_eq!(json["chart"]["title"], "Frame Breakdown");
    assert_eq!(json["chart"]["legend_position"], "upper-right");
}
