//! Configuration semantic validation.
//!
//! Checks values that parse fine as TOML but cannot produce a chart: zero sizes,
//! unknown colors, rotations plotters cannot express, unsupported image formats.

use crate::chart::{ChartColor, ImageFormat, LabelRotation};
use crate::config::Config;
use crate::{Result, TimemapError};

/// Largest accepted image edge in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error naming the first offending key.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_input_section(config)?;
    validate_output_section(config)?;
    validate_chart_section(config)?;
    Ok(())
}

fn validate_input_section(config: &Config) -> Result<()> {
    let input = &config.input;
    if input.path.as_os_str().is_empty() {
        return Err(TimemapError::Config("input.path cannot be empty".to_string()));
    }

    let columns = [
        ("input.function_column", &input.function_column),
        ("input.total_column", &input.total_column),
        ("input.mean_column", &input.mean_column),
    ];
    for (key, name) in columns {
        if name.trim().is_empty() {
            return Err(TimemapError::Config(format!("{key} cannot be empty")));
        }
    }

    if input.function_column == input.total_column
        || input.function_column == input.mean_column
        || input.total_column == input.mean_column
    {
        return Err(TimemapError::Config(
            "input.function_column, input.total_column and input.mean_column must be distinct"
                .to_string(),
        ));
    }
    Ok(())
}

fn validate_output_section(config: &Config) -> Result<()> {
    let output = &config.output;
    if output.path.as_os_str().is_empty() {
        return Err(TimemapError::Config("output.path cannot be empty".to_string()));
    }
    if ImageFormat::from_path(&output.path).is_none() {
        return Err(TimemapError::Config(format!(
            "output.path must end in one of {}, got {}",
            ImageFormat::SUPPORTED_EXTENSIONS.join(", "),
            output.path.display()
        )));
    }

    validate_image_size(output.width, output.height)
}

/// Both image dimensions must lie in `1..=MAX_DIMENSION`.
///
/// # Errors
/// Returns a `Config` error naming the first dimension out of range.
pub fn validate_image_size(width: u32, height: u32) -> Result<()> {
    for (key, value) in [("output.width", width), ("output.height", height)] {
        if value == 0 || value > MAX_DIMENSION {
            return Err(TimemapError::Config(format!(
                "{key} must be between 1 and {MAX_DIMENSION}, got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;

    for (key, value) in [
        ("chart.font_size", chart.font_size),
        ("chart.tick_font_size", chart.tick_font_size),
        ("chart.line_width", chart.line_width),
    ] {
        if value == 0 {
            return Err(TimemapError::Config(format!("{key} must be greater than 0")));
        }
    }

    if chart.font_family.trim().is_empty() {
        return Err(TimemapError::Config(
            "chart.font_family cannot be empty".to_string(),
        ));
    }

    if LabelRotation::from_degrees(chart.x_label_rotation).is_none() {
        return Err(TimemapError::Config(format!(
            "chart.x_label_rotation must be 0, 90, 180 or 270, got {}",
            chart.x_label_rotation
        )));
    }

    for (key, value) in [
        ("chart.background", &chart.background),
        ("chart.total_color", &chart.total_color),
        ("chart.mean_color", &chart.mean_color),
    ] {
        ChartColor::parse(value).map_err(|reason| TimemapError::Config(format!("{key}: {reason}")))?;
    }
    Ok(())
}
