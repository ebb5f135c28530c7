pub mod config;
pub mod init;
pub mod render;

use std::path::Path;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{apply_cli_overrides, exit_code_for, run_render, run_render_impl};

use crate::Result;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Loads the explicit config file, or discovers one, or skips it with `--no-config`.
///
/// # Errors
/// Returns an error if the chosen file is missing, unreadable or invalid TOML.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
