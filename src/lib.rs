pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;
pub mod render;

pub use error::{Result, Stage, TimemapError};
pub use render::{RenderSummary, render};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
