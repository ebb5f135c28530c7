//! Chart styling primitives: colors, tick label rotation and legend placement.

use std::fmt;
use std::str::FromStr;

use plotters::prelude::{RGBColor, SeriesLabelPosition};
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::LegendPosition;

/// An opaque RGB color written as `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color.
    ///
    /// # Errors
    /// Returns a human-readable reason when `value` is not `#rgb` or `#rrggbb`.
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| format!("expected a hex color like \"#1f77b4\", got {value:?}"))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex digits in {value:?}"));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|e| format!("{value:?}: {e}"));
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            n => Err(format!("expected 3 or 6 hex digits in {value:?}, got {n}")),
        }
    }

    #[must_use]
    pub const fn to_rgb(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

impl FromStr for ChartColor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rotation of the x-axis category labels, counterclockwise.
///
/// Quarter turns only; the bitmap text renderer rotates glyphs in steps of 90 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelRotation {
    Horizontal,
    /// Reads bottom to top.
    #[default]
    Up,
    UpsideDown,
    /// Reads top to bottom.
    Down,
}

impl LabelRotation {
    #[must_use]
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Horizontal),
            90 => Some(Self::Up),
            180 => Some(Self::UpsideDown),
            270 => Some(Self::Down),
            _ => None,
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Horizontal => 0,
            Self::Up => 90,
            Self::UpsideDown => 180,
            Self::Down => 270,
        }
    }

    /// plotters rotates clockwise, so a counterclockwise quarter turn is `Rotate270`.
    #[must_use]
    pub const fn font_transform(self) -> FontTransform {
        match self {
            Self::Horizontal => FontTransform::None,
            Self::Up => FontTransform::Rotate270,
            Self::UpsideDown => FontTransform::Rotate180,
            Self::Down => FontTransform::Rotate90,
        }
    }

    /// Anchor that keeps the label's end closest to the axis at its tick.
    #[must_use]
    pub fn anchor(self) -> Pos {
        match self {
            Self::Horizontal => Pos::new(HPos::Center, VPos::Top),
            Self::Up => Pos::new(HPos::Right, VPos::Center),
            Self::UpsideDown => Pos::new(HPos::Center, VPos::Bottom),
            Self::Down => Pos::new(HPos::Left, VPos::Center),
        }
    }

    /// Whether the label runs along the vertical direction once rotated.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

#[must_use]
pub const fn legend_anchor(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
