use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !cli.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, names an
/// unsupported version, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let config = FileConfigLoader::new().load_from_path(config_path)?;
    validate_config_semantics(&config)
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[input]\n");
    let _ = writeln!(output, "  path = {:?}", config.input.path.display().to_string());
    let _ = writeln!(output, "  function_column = {:?}", config.input.function_column);
    let _ = writeln!(output, "  total_column = {:?}", config.input.total_column);
    let _ = writeln!(output, "  mean_column = {:?}", config.input.mean_column);

    output.push_str("\n[output]\n");
    let _ = writeln!(output, "  path = {:?}", config.output.path.display().to_string());
    let _ = writeln!(output, "  width = {}", config.output.width);
    let _ = writeln!(output, "  height = {}", config.output.height);

    let chart = &config.chart;
    output.push_str("\n[chart]\n");
    let _ = writeln!(output, "  title = {:?}", chart.title);
    let _ = writeln!(output, "  x_label = {:?}", chart.x_label);
    let _ = writeln!(output, "  y_label = {:?}", chart.y_label);
    let _ = writeln!(output, "  font_family = {:?}", chart.font_family);
    let _ = writeln!(output, "  font_size = {}", chart.font_size);
    let _ = writeln!(output, "  tick_font_size = {}", chart.tick_font_size);
    let _ = writeln!(output, "  x_label_rotation = {}", chart.x_label_rotation);
    let legend = match chart.legend_position {
        crate::config::LegendPosition::UpperLeft => "upper-left",
        crate::config::LegendPosition::UpperRight => "upper-right",
        crate::config::LegendPosition::LowerLeft => "lower-left",
        crate::config::LegendPosition::LowerRight => "lower-right",
    };
    let _ = writeln!(output, "  legend_position = {legend:?}");
    let _ = writeln!(output, "  background = {:?}", chart.background);
    let _ = writeln!(output, "  total_color = {:?}", chart.total_color);
    let _ = writeln!(output, "  mean_color = {:?}", chart.mean_color);
    let _ = writeln!(output, "  line_width = {}", chart.line_width);
    let _ = writeln!(output, "  marker_size = {}", chart.marker_size);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
