//! Core types shared between the pipeline and its front ends.

use serde::{Deserialize, Serialize};

/// Output format for converted images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Webp,
    Png,
    Gif,
    Bmp,
    Tiff,
    Ico,
}

impl OutputFormat {
    /// File extension used for output files in this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Ico => "ico",
        }
    }

    /// All supported output formats, in front-end display order.
    #[must_use]
    pub fn all() -> &'static [OutputFormat] {
        &[
            Self::Jpeg,
            Self::Webp,
            Self::Png,
            Self::Gif,
            Self::Bmp,
            Self::Tiff,
            Self::Ico,
        ]
    }

    /// Whether the encode quality setting affects this format.
    ///
    /// Only JPEG is encoded lossily with a quality parameter; the remaining
    /// formats are lossless or ignore quality entirely.
    #[must_use]
    pub fn uses_quality(&self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Jpeg => "JPEG",
            Self::Webp => "WEBP",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::Ico => "ICO",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "tiff" | "tif" => Ok(Self::Tiff),
            "ico" => Ok(Self::Ico),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// How source images are scaled before any other transform.
///
/// The aspect-preserving modes fix one dimension and derive the other from
/// the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScaleMode {
    /// Leave the image at its source dimensions.
    #[default]
    None,
    /// Resize to exactly the given dimensions, ignoring aspect ratio.
    ExplicitDimensions { width: u32, height: u32 },
    /// Resize to the given width, preserving aspect ratio.
    ByWidth { width: u32 },
    /// Resize to the given height, preserving aspect ratio.
    ByHeight { height: u32 },
    /// Resize so the longer of width/height equals the given size.
    ByLongestSide { size: u32 },
}

impl ScaleMode {
    /// Whether this mode leaves the image untouched.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
