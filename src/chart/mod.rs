//! Chart model and drawing on top of plotters.

mod format;
mod line_chart;
mod series;
mod style;

pub use format::ImageFormat;
pub use line_chart::{ChartStyle, MEAN_SERIES_NAME, TOTAL_SERIES_NAME, TimeMapChart};
pub use series::Series;
pub use style::{ChartColor, LabelRotation, legend_anchor};
