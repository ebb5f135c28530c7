use std::path::{Path, PathBuf};

use crate::error::{Result, TimemapError};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::model::CONFIG_VERSION;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".chronos-timemap.toml";
const USER_CONFIG_NAME: &str = "config.toml";

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(TimemapError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.chronos-timemap.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. Returns `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.user_config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| TimemapError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.is_file(&path) {
                return self.read_config(&path);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.is_file(path) {
            return Err(TimemapError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
