use super::style::ChartColor;

/// One plotted line: a value per category, in category order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub name: String,
    pub color: ChartColor,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: ChartColor, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }

    /// Points in chart coordinates, category `i` at `x = i`.
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as f64, *value))
    }

    /// Smallest and largest value, `None` when the series is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
