use std::fs;

use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TimemapError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TimemapError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# chronos-timemap configuration file
# Every key is optional; the values below are the defaults.

version = "1"

[input]
# Profile CSV written by the Chronos profiler
path = "profiler/ChronosProfile.csv"

# Header names of the columns to plot (exact, case-sensitive)
function_column = "Calling Function"
total_column = "Total Time"
mean_column = "Mean Time"

[output]
# The extension selects the format: png, bmp, jpg, jpeg or svg
path = "program_timemap.png"
width = 1024
height = 768

[chart]
title = "Function Heatmap"
x_label = "Function Names"
y_label = "Time (s)"
font_family = "Liberation Mono"
font_size = 15
tick_font_size = 12

# Counterclockwise rotation of the function names: 0, 90, 180 or 270
x_label_rotation = 90

# upper-left, upper-right, lower-left or lower-right
legend_position = "upper-right"

background = "#eaeaf2"
total_color = "#0000ff"
mean_color = "#ff0000"
line_width = 2

# Point marker radius, 0 for plain lines
marker_size = 3
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
