//! The time map: one x category per profiled function, one line per time column.
//!
//! plotters only knows numeric axes, so categories sit at `x = 0..n` on an
//! `f64` axis padded by half a step on each side. The mesh draws the y axis;
//! category ticks, their (rotated) names and the x-axis title are drawn by hand
//! on the root area so long function names get the room they need.

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_backend::DrawingBackend;

use super::series::Series;
use super::style::{ChartColor, LabelRotation, legend_anchor};
use crate::config::{ChartConfig, LegendPosition};
use crate::profile::ProfileTable;
use crate::{Result, TimemapError};

pub const TOTAL_SERIES_NAME: &str = "Total Time";
pub const MEAN_SERIES_NAME: &str = "Mean Time";

const MARGIN: u32 = 20;
const TICK_LENGTH: u32 = 5;
const LABEL_GAP: u32 = 4;
const LEGEND_SWATCH: i32 = 20;
const Y_TICKS: usize = 10;
/// Fraction of the value span added above the largest value.
const HEADROOM: f64 = 0.1;

type TimeMapContext<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Resolved styling, with colors and rotation already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub font_family: String,
    pub font_size: f64,
    pub tick_font_size: f64,
    pub rotation: LabelRotation,
    pub legend: LegendPosition,
    pub background: ChartColor,
    pub line_width: u32,
    pub marker_size: u32,
}

impl ChartStyle {
    /// # Errors
    /// Returns a `Config` error for an unparsable color or rotation.
    pub fn from_config(config: &ChartConfig) -> Result<Self> {
        let rotation = LabelRotation::from_degrees(config.x_label_rotation).ok_or_else(|| {
            TimemapError::Config(format!(
                "chart.x_label_rotation must be 0, 90, 180 or 270, got {}",
                config.x_label_rotation
            ))
        })?;

        Ok(Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            font_family: config.font_family.clone(),
            font_size: f64::from(config.font_size),
            tick_font_size: f64::from(config.tick_font_size),
            rotation,
            legend: config.legend_position,
            background: parse_color("chart.background", &config.background)?,
            line_width: config.line_width,
            marker_size: config.marker_size,
        })
    }
}

/// Line chart of total and mean time per function.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMapChart {
    categories: Vec<String>,
    series: Vec<Series>,
    style: ChartStyle,
}

impl TimeMapChart {
    /// Build the chart model from a profile table, keeping row order.
    ///
    /// # Errors
    /// `Render` if the table has no rows, `Config` if the styling is invalid.
    pub fn from_table(table: &ProfileTable, config: &ChartConfig) -> Result<Self> {
        if table.is_empty() {
            return Err(TimemapError::Render(
                "profile table has no rows to plot".to_string(),
            ));
        }

        let style = ChartStyle::from_config(config)?;
        let categories = table.functions().map(str::to_string).collect();
        let series = vec![
            Series::new(
                TOTAL_SERIES_NAME,
                parse_color("chart.total_color", &config.total_color)?,
                table.rows().iter().map(|row| row.total_time).collect(),
            ),
            Series::new(
                MEAN_SERIES_NAME,
                parse_color("chart.mean_color", &config.mean_color)?,
                table.rows().iter().map(|row| row.mean_time).collect(),
            ),
        ];

        Ok(Self {
            categories,
            series,
            style,
        })
    }

    /// x-axis categories in draw order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Plotted series in legend order: total first, mean second.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// y-axis range: always includes zero, with headroom above the largest value.
    ///
    /// An all-zero chart gets a unit range so the axis is not degenerate.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        let (low, high) = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .fold((0.0_f64, 0.0_f64), |(lo, hi), (min, max)| {
                (lo.min(min), hi.max(max))
            });

        let span = high - low;
        if span <= 0.0 {
            return (low, low + 1.0);
        }

        let bottom = if low < 0.0 { low - span * HEADROOM } else { low };
        (bottom, high + span * HEADROOM)
    }

    /// Draw the chart onto `root`, which should cover the whole image.
    ///
    /// # Errors
    /// Returns `Render` when the backend rejects a drawing operation.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let style = &self.style;
        let title_font = FontDesc::new(
            FontFamily::from(style.font_family.as_str()),
            style.font_size,
            FontStyle::Normal,
        );
        let tick_font = FontDesc::new(
            FontFamily::from(style.font_family.as_str()),
            style.tick_font_size,
            FontStyle::Normal,
        );
        let axis_title_style = TextStyle::from(title_font.clone()).color(&BLACK);
        let tick_style = TextStyle::from(tick_font).color(&BLACK);
        let category_style = tick_style
            .transform(style.rotation.font_transform())
            .pos(style.rotation.anchor());

        root.fill(&WHITE).map_err(render_error)?;

        let (y_min, y_max) = self.value_range();
        let precision = tick_precision(y_max - y_min);

        let label_extent = self.category_label_extent(root, &tick_style)?;
        let x_title_height = text_size(root, &style.x_label, &axis_title_style)?.1;
        let y_title_height = text_size(root, &style.y_label, &axis_title_style)?.1;
        let mut y_tick_width = 0;
        for value in [y_min, y_max] {
            let (width, _) = text_size(root, &format_tick(value, precision), &tick_style)?;
            y_tick_width = y_tick_width.max(width);
        }

        let x_max = self.categories.len() as f64 - 0.5;
        let mut chart = ChartBuilder::on(root)
            .caption(&style.title, title_font)
            .margin(MARGIN)
            .x_label_area_size(TICK_LENGTH + 3 * LABEL_GAP + label_extent + x_title_height)
            .y_label_area_size(TICK_LENGTH + 3 * LABEL_GAP + y_tick_width + y_title_height)
            .build_cartesian_2d(-0.5..x_max, y_min..y_max)
            .map_err(render_error)?;

        chart
            .plotting_area()
            .fill(&style.background.to_rgb())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_x_axis()
            .x_label_formatter(&|_: &f64| String::new())
            .y_labels(Y_TICKS)
            .y_label_formatter(&|value: &f64| format_tick(*value, precision))
            .y_desc(style.y_label.as_str())
            .axis_desc_style(axis_title_style.clone())
            .label_style(tick_style.clone())
            .bold_line_style(WHITE)
            .light_line_style(style.background.to_rgb())
            .draw()
            .map_err(render_error)?;

        self.draw_lines(&mut chart, &tick_style, y_min, y_max)?;
        self.draw_category_axis(root, &chart, &category_style, &axis_title_style, label_extent)
    }

    /// Category grid, both series and the legend.
    #[allow(clippy::cast_precision_loss)]
    fn draw_lines<'a, DB: DrawingBackend + 'a>(
        &self,
        chart: &mut TimeMapContext<'a, DB>,
        legend_style: &TextStyle<'_>,
        y_min: f64,
        y_max: f64,
    ) -> Result<()> {
        let style = &self.style;

        // Vertical grid line through every category.
        chart
            .draw_series((0..self.categories.len()).map(|index| {
                let x = index as f64;
                PathElement::new(vec![(x, y_min), (x, y_max)], WHITE)
            }))
            .map_err(render_error)?;

        for series in &self.series {
            let color = series.color.to_rgb();
            let line_style = color.stroke_width(style.line_width);

            chart
                .draw_series(LineSeries::new(series.points(), line_style))
                .map_err(render_error)?
                .label(series.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], line_style)
                });

            if style.marker_size > 0 {
                chart
                    .draw_series(
                        series
                            .points()
                            .map(|point| Circle::new(point, style.marker_size, color.filled())),
                    )
                    .map_err(render_error)?;
            }
        }

        chart
            .configure_series_labels()
            .position(legend_anchor(style.legend))
            .label_font(legend_style.clone())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)
    }

    /// x axis line, one tick and name per category, and the axis title.
    #[allow(clippy::cast_precision_loss)]
    fn draw_category_axis<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        chart: &TimeMapContext<'_, DB>,
        category_style: &TextStyle<'_>,
        title_style: &TextStyle<'_>,
        label_extent: u32,
    ) -> Result<()> {
        let (y_min, _) = self.value_range();
        let x_max = self.categories.len() as f64 - 0.5;

        let plot = chart.plotting_area();
        let (left, bottom) = plot.map_coordinate(&(-0.5, y_min));
        let (right, _) = plot.map_coordinate(&(x_max, y_min));
        root.draw(&PathElement::new(vec![(left, bottom), (right, bottom)], BLACK))
            .map_err(render_error)?;

        let label_top = bottom + pixels(TICK_LENGTH + LABEL_GAP);
        for (index, name) in self.categories.iter().enumerate() {
            let (x, _) = plot.map_coordinate(&(index as f64, y_min));
            root.draw(&PathElement::new(
                vec![(x, bottom), (x, bottom + pixels(TICK_LENGTH))],
                BLACK,
            ))
            .map_err(render_error)?;
            root.draw(&Text::new(name.as_str(), (x, label_top), category_style.clone()))
                .map_err(render_error)?;
        }

        let title_top = label_top + pixels(label_extent + LABEL_GAP);
        root.draw(&Text::new(
            self.style.x_label.as_str(),
            ((left + right) / 2, title_top),
            title_style.pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(render_error)
    }

    /// Room the category names need below the axis once rotated.
    fn category_label_extent<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        tick_style: &TextStyle<'_>,
    ) -> Result<u32> {
        let mut extent = 0;
        for name in &self.categories {
            let (width, height) = text_size(root, name, tick_style)?;
            let along_y = if self.style.rotation.is_vertical() {
                width
            } else {
                height
            };
            extent = extent.max(along_y);
        }
        Ok(extent)
    }
}

fn parse_color(key: &str, value: &str) -> Result<ChartColor> {
    ChartColor::parse(value).map_err(|reason| TimemapError::Config(format!("{key}: {reason}")))
}

fn text_size<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    style: &TextStyle<'_>,
) -> Result<(u32, u32)> {
    root.estimate_text_size(text, style).map_err(render_error)
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> TimemapError {
    TimemapError::Render(err.to_string())
}

fn pixels(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Decimal places for y tick labels given the span of the axis.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_precision(span: f64) -> usize {
    if span >= 10.0 {
        1
    } else if span >= 1.0 {
        2
    } else if span > 0.0 {
        ((-span.log10()).ceil() as usize + 2).min(9)
    } else {
        2
    }
}

fn format_tick(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
#[path = "line_chart_tests.rs"]
mod tests;
