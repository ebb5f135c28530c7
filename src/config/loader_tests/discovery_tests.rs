//! Tests for config file discovery from various locations (current dir, user config, fallback).

use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::{Config, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let fs = MockFileSystem::new();
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let config_content = r#"
[chart]
title = "Local"
"#;

    let fs = MockFileSystem::new()
        .in_dir("/my/project")
        .with_file("/my/project/.chronos-timemap.toml", config_content);

    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();

    assert_eq!(config.chart.title, "Local");
}

#[test]
fn loads_user_config_as_fallback() {
    let config_content = r#"
[output]
width = 1600
"#;

    let fs = MockFileSystem::new()
        .with_user_dir(Some(PathBuf::from("/home/testuser/.config/chronos-timemap")))
        .with_file(
            "/home/testuser/.config/chronos-timemap/config.toml",
            config_content,
        );

    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();

    assert_eq!(config.output.width, 1600);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file(
            "/project/.chronos-timemap.toml",
            "[chart]\ntitle = \"local\"\n",
        )
        .with_file(
            "/home/user/.config/chronos-timemap/config.toml",
            "[chart]\ntitle = \"user\"\n",
        );

    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().unwrap();

    assert_eq!(config.chart.title, "local");
}

#[test]
fn missing_user_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_user_dir(None);
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file(
        "/configs/timemap.toml",
        "[input]\npath = \"build/profile.csv\"\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader
        .load_from_path(&PathBuf::from("/configs/timemap.toml"))
        .unwrap();

    assert_eq!(config.input.path, PathBuf::from("build/profile.csv"));
}

#[test]
fn load_from_path_missing_file_is_config_error() {
    let fs = MockFileSystem::new();
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader
        .load_from_path(&PathBuf::from("/configs/missing.toml"))
        .unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("not found"));
}
