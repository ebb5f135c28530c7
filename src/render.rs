//! Read, Render and Write: the whole pipeline from profile CSV to image file.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend};
use plotters_backend::DrawingBackend;

use crate::chart::{ImageFormat, TimeMapChart};
use crate::config::{Config, validate_image_size};
use crate::profile::{ColumnNames, ProfileTable};
use crate::{Result, TimemapError};

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub format: ImageFormat,
    /// Number of x-axis categories, one per CSV data row.
    pub functions: usize,
    pub width: u32,
    pub height: u32,
}

/// Render the profile at `input` into the image at `output`.
///
/// Stages run in pipeline order: the table is read before anything about the
/// output is checked. The image is drawn into a hidden sibling file and renamed
/// over `output` only once complete, so a failed run never leaves a partial
/// image and an existing image is replaced whole.
///
/// # Errors
/// - `Config` for an image size outside `1..=MAX_DIMENSION` or invalid styling
/// - `InputNotFound` / `MalformedInput` when the CSV cannot be used
/// - `OutputWrite` for an unsupported extension or a missing output directory,
///   checked before anything is drawn
/// - `Render` when plotters fails to draw
/// - `OutputWrite` when encoding or moving the image into place fails
pub fn render(input: &Path, output: &Path, config: &Config) -> Result<RenderSummary> {
    let (width, height) = (config.output.width, config.output.height);
    validate_image_size(width, height)?;

    let table = ProfileTable::read_path(input, &ColumnNames::from(&config.input))?;

    let format = output_format(output)?;
    ensure_output_dir(output)?;

    let chart = TimeMapChart::from_table(&table, &config.chart)?;

    let staging = staging_path(output);
    tracing::debug!(staging = %staging.display(), %format, "drawing chart");
    if let Err(err) = draw_to_file(&chart, &staging, format, (width, height)) {
        discard(&staging);
        return Err(err);
    }

    if let Err(err) = fs::rename(&staging, output) {
        discard(&staging);
        return Err(TimemapError::output_write(output, err));
    }

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        functions = table.len(),
        "rendered time map"
    );

    Ok(RenderSummary {
        output: output.to_path_buf(),
        format,
        functions: table.len(),
        width,
        height,
    })
}

fn output_format(output: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(output).ok_or_else(|| {
        let extension = output
            .extension()
            .map_or_else(|| "none".to_string(), |e| format!(".{}", e.to_string_lossy()));
        TimemapError::output_write(
            output,
            format!(
                "unsupported image format (extension {extension}); use one of {}",
                ImageFormat::SUPPORTED_EXTENSIONS.join(", ")
            ),
        )
    })
}

fn ensure_output_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(
            TimemapError::output_write(output, format!("directory {} does not exist", dir.display())),
        ),
        _ => Ok(()),
    }
}

/// `dir/.name.partial.ext` next to `output`; the extension is kept because
/// the bitmap encoder picks its format from it.
fn staging_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map_or_else(|| "chart".into(), |s| s.to_string_lossy());
    let name = match output.extension() {
        Some(ext) => format!(".{stem}.partial.{}", ext.to_string_lossy()),
        None => format!(".{stem}.partial"),
    };
    output.with_file_name(name)
}

fn draw_to_file(
    chart: &TimeMapChart,
    path: &Path,
    format: ImageFormat,
    size: (u32, u32),
) -> Result<()> {
    if format.is_vector() {
        paint(chart, SVGBackend::new(path, size).into_drawing_area(), path)
    } else {
        paint(chart, BitMapBackend::new(path, size).into_drawing_area(), path)
    }
}

fn paint<DB: DrawingBackend>(
    chart: &TimeMapChart,
    root: DrawingArea<DB, Shift>,
    path: &Path,
) -> Result<()> {
    chart.draw(&root)?;
    root.present()
        .map_err(|err| TimemapError::output_write(path, err))
}

fn discard(path: &Path) {
    if path.exists()
        && let Err(err) = fs::remove_file(path)
    {
        tracing::warn!(path = %path.display(), error = %err, "could not remove partial image");
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
