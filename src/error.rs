use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage a failure belongs to, shown in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Render,
    Write,
    Config,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Read"),
            Self::Render => write!(f, "Render"),
            Self::Write => write!(f, "Write"),
            Self::Config => write!(f, "Config"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TimemapError {
    #[error("Input not found: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input: {path}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("Failed to write output: {path}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TimemapError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::OutputWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The stage that failed.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InputNotFound { .. } | Self::MalformedInput { .. } => Stage::Read,
            Self::Render(_) => Stage::Render,
            Self::OutputWrite { .. } | Self::Io(_) => Stage::Write,
            Self::Config(_)
            | Self::FileAccess { .. }
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => Stage::Config,
        }
    }

    /// Short label used as the diagnostic headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "InputNotFound",
            Self::MalformedInput { .. } => "MalformedInput",
            Self::Render(_) => "Render",
            Self::OutputWrite { .. } => "OutputWriteError",
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Headline message, prefixed with the failing stage.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} stage failed: {self}", self.stage())
    }

    /// Underlying cause, when there is one worth printing separately.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InputNotFound { source, .. } | Self::FileAccess { source, .. } => {
                Some(source.to_string())
            }
            Self::MalformedInput { reason, .. } | Self::OutputWrite { reason, .. } => {
                Some(reason.clone())
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InputNotFound { .. } => Some(
                "run the profiled program first, or pass the CSV path: chronos-timemap render <INPUT>",
            ),
            Self::MalformedInput { .. } => Some(
                "the header must contain the function, total time and mean time columns (see [input] in the config)",
            ),
            Self::OutputWrite { .. } => Some(
                "check that the output directory exists and is writable, and that the extension is png, bmp, jpg or svg",
            ),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("run `chronos-timemap config validate` to check the configuration file")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimemapError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
