use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chronos-timemap")]
#[command(author, version, about = "Render a Chronos profiler CSV as a per-function timing chart")]
#[command(long_about = "Reads the per-function timing table written by the Chronos profiler and \
    plots Total Time and Mean Time for every function, in file order.\n\n\
    Running without a subcommand renders profiler/ChronosProfile.csv to program_timemap.png.\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Reading the profile, rendering or writing the image failed\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a profile CSV to an image (the default)
    Render(RenderArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    /// Profile CSV to read (default: profiler/ChronosProfile.csv)
    pub input: Option<PathBuf>,

    /// Image to write; the extension picks the format (png, bmp, jpg, jpeg, svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chart title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Image width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
