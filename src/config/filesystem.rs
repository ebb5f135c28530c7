//! The few filesystem queries config discovery makes, behind a trait so the
//! loader can be tested without touching disk.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether `path` names a regular file a config could be read from.
    fn is_file(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the working directory is gone or unreadable.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user config directory (`~/.config/chronos-timemap` on Linux), if the
    /// platform has one.
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chronos-timemap")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
