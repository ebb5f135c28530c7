//! Colored failure diagnostics on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::TimemapError;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org: presence of the variable (any value) disables color
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a pipeline failure: stage headline, cause and a hint when there is one.
    pub fn report(&self, err: &TimemapError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, err);
    }

    /// Writes a pipeline failure to a writer.
    pub fn write_report<W: Write>(&self, w: &mut W, err: &TimemapError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes error to a writer.
    ///
    /// Format: `✖ {error_type}: {message}`
    ///         `  × {detail}` (optional)
    ///         `  help: {suggestion}` (optional)
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing useful can be done if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
