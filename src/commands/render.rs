use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, validate_config_semantics};
use crate::error::Stage;
use crate::output::ErrorOutput;
use crate::render::{RenderSummary, render};
use crate::{EXIT_CONFIG_ERROR, EXIT_RENDER_ERROR, EXIT_SUCCESS, Result, TimemapError};

use super::load_config;

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(summary) => {
            if !cli.quiet {
                println!(
                    "Wrote {} ({}, {} functions, {}x{})",
                    summary.output.display(),
                    summary.format,
                    summary.functions,
                    summary.width,
                    summary.height
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            exit_code_for(&e)
        }
    }
}

/// Configuration problems exit with 2, pipeline failures with 1.
#[must_use]
pub const fn exit_code_for(err: &TimemapError) -> i32 {
    match err.stage() {
        Stage::Config => EXIT_CONFIG_ERROR,
        Stage::Read | Stage::Render | Stage::Write => EXIT_RENDER_ERROR,
    }
}

/// Loads configuration, applies command-line overrides and runs the pipeline.
///
/// The file configuration is validated before overrides are applied, so a bad
/// `--output` extension surfaces as a write failure rather than a config error.
/// `--width`/`--height` are range-checked again by [`render`].
///
/// # Errors
/// Returns the first failure of config loading, reading, rendering or writing.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<RenderSummary> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    validate_config_semantics(&config)?;
    apply_cli_overrides(&mut config, args);

    tracing::debug!(
        input = %config.input.path.display(),
        output = %config.output.path.display(),
        "starting render"
    );
    render(&config.input.path, &config.output.path, &config)
}

pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(input) = &args.input {
        config.input.path.clone_from(input);
    }
    if let Some(output) = &args.output {
        config.output.path.clone_from(output);
    }
    if let Some(title) = &args.title {
        config.chart.title.clone_from(title);
    }
    if let Some(width) = args.width {
        config.output.width = width;
    }
    if let Some(height) = args.height {
        config.output.height = height;
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
