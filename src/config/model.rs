use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_INPUT_PATH: &str = "profiler/ChronosProfile.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "program_timemap.png";

pub const DEFAULT_FUNCTION_COLUMN: &str = "Calling Function";
pub const DEFAULT_TOTAL_COLUMN: &str = "Total Time";
pub const DEFAULT_MEAN_COLUMN: &str = "Mean Time";

/// Root configuration, one section per pipeline stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config format version. Omitted means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Where the profile table comes from and which columns to read [input].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Header of the function name column (exact, case-sensitive).
    #[serde(default = "default_function_column")]
    pub function_column: String,

    /// Header of the cumulative time column.
    #[serde(default = "default_total_column")]
    pub total_column: String,

    /// Header of the per-call mean time column.
    #[serde(default = "default_mean_column")]
    pub mean_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            function_column: default_function_column(),
            total_column: default_total_column(),
            mean_column: default_mean_column(),
        }
    }
}

/// Output image location and size [output].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Image path; the extension selects the format.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Corner of the plotting area holding the legend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    UpperLeft,
    #[default]
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Chart styling [chart].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_x_label")]
    pub x_label: String,

    #[serde(default = "default_y_label")]
    pub y_label: String,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Size of the title and axis titles.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Size of tick labels and legend entries.
    #[serde(default = "default_tick_font_size")]
    pub tick_font_size: u32,

    /// Counterclockwise rotation of x tick labels: 0, 90, 180 or 270.
    #[serde(default = "default_x_label_rotation")]
    pub x_label_rotation: u16,

    #[serde(default)]
    pub legend_position: LegendPosition,

    /// Plot area fill (hex).
    #[serde(default = "default_background")]
    pub background: String,

    /// Color of the "Total Time" series (hex).
    #[serde(default = "default_total_color")]
    pub total_color: String,

    /// Color of the "Mean Time" series (hex).
    #[serde(default = "default_mean_color")]
    pub mean_color: String,

    #[serde(default = "default_line_width")]
    pub line_width: u32,

    /// Radius of the point markers; 0 draws lines only.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            tick_font_size: default_tick_font_size(),
            x_label_rotation: default_x_label_rotation(),
            legend_position: LegendPosition::default(),
            background: default_background(),
            total_color: default_total_color(),
            mean_color: default_mean_color(),
            line_width: default_line_width(),
            marker_size: default_marker_size(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_function_column() -> String {
    DEFAULT_FUNCTION_COLUMN.to_string()
}

fn default_total_column() -> String {
    DEFAULT_TOTAL_COLUMN.to_string()
}

fn default_mean_column() -> String {
    DEFAULT_MEAN_COLUMN.to_string()
}

const fn default_width() -> u32 {
    1024
}

const fn default_height() -> u32 {
    768
}

fn default_title() -> String {
    "Function Heatmap".to_string()
}

fn default_x_label() -> String {
    "Function Names".to_string()
}

fn default_y_label() -> String {
    "Time (s)".to_string()
}

fn default_font_family() -> String {
    "Liberation Mono".to_string()
}

const fn default_font_size() -> u32 {
    15
}

const fn default_tick_font_size() -> u32 {
    12
}

const fn default_x_label_rotation() -> u16 {
    90
}

fn default_background() -> String {
    "#eaeaf2".to_string()
}

fn default_total_color() -> String {
    "#0000ff".to_string()
}

fn default_mean_color() -> String {
    "#ff0000".to_string()
}

const fn default_line_width() -> u32 {
    2
}

const fn default_marker_size() -> u32 {
    3
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
