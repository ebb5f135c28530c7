use std::fmt;
use std::path::Path;

/// Image encoding, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Bmp,
    Jpeg,
    Svg,
}

impl ImageFormat {
    pub const SUPPORTED_EXTENSIONS: &'static [&'static str] = &["png", "bmp", "jpg", "jpeg", "svg"];

    /// Format for `path`, matching the extension case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
        }
    }

    /// Vector output goes through the SVG backend, everything else is rasterized.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Svg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
