#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the chronos-timemap binary.
#[macro_export]
macro_rules! chronos_timemap {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("chronos-timemap"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Creates a local `.chronos-timemap.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".chronos-timemap.toml", content);
    }

    /// Writes a profile at the default location, `profiler/ChronosProfile.csv`.
    pub fn create_default_profile(&self, content: &str) {
        self.create_file("profiler/ChronosProfile.csv", content);
    }

    /// Sorted names of the entries directly inside the fixture directory.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp directory")
            .map(|entry| {
                entry
                    .expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The two-function profile from the README.
pub const MINIMAL_PROFILE: &str = "\
Calling Function,Total Time,Mean Time
foo,1.50,0.50
bar,3.00,1.00
";

/// A profile as the Chronos profiler writes it, with every column.
pub const FULL_PROFILE: &str = "\
Max Time,Min Time,Mean Time,Total Calls,Total Time,Hash ID,Calling Function
0.300000,0.100000,0.200000,3.000000,0.600000,8812,render_frame
0.050000,0.050000,0.050000,1.000000,0.050000,8813,load_assets
0.012000,0.008000,0.010000,120.000000,1.200000,8814,physics::step
";

/// Profile missing the `Mean Time` column.
pub const PROFILE_WITHOUT_MEAN: &str = "\
Calling Function,Total Time
foo,1.50
";

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Custom config that renders to SVG.
pub const SVG_CONFIG: &str = r##"
version = "1"

[output]
path = "timemap.svg"
width = 800
height = 600

[chart]
title = "Frame Breakdown"
x_label_rotation = 0
total_color = "#1f77b4"
"##;
