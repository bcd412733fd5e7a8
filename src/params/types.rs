use pixforge_common::{OutputFormat, ScaleMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Full set of user-chosen conversion options for one run.
///
/// A pure configuration holder: fields are set freely by the front end and
/// validated when a job starts, so partially edited states are representable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransformParameters {
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Encode quality 0-100. Only affects JPEG output.
    #[serde(default = "default_quality")]
    pub quality: u8,

    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,

    #[serde(default)]
    pub scale: ScaleMode,

    #[serde(default)]
    pub watermark: Option<WatermarkSettings>,

    #[serde(default)]
    pub crop: Option<CropRect>,
}

fn default_quality() -> u8 {
    75
}

fn default_destination_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            scale: ScaleMode::default(),
            watermark: None,
            crop: None,
            output_format: OutputFormat::default(),
            quality: default_quality(),
            destination_dir: default_destination_dir(),
        }
    }
}

/// Text watermark settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WatermarkSettings {
    /// Text to composite onto each image.
    pub text: String,

    /// Path to a TTF/OTF font file, loaded once at job start.
    pub font: PathBuf,

    /// Text color as a `#rrggbb` hex string.
    #[serde(default = "default_color_hex")]
    pub color_hex: String,

    /// Opacity 0-100.
    #[serde(default = "default_opacity")]
    pub opacity_percent: u8,

    /// Counter-clockwise rotation of the text block.
    #[serde(default)]
    pub rotation_degrees: f32,

    /// Padding around the text block as a percentage of the short image side.
    #[serde(default = "default_padding")]
    pub padding_percent: u8,

    /// Glyph height as a percentage of the short image side.
    #[serde(default = "default_size")]
    pub size_percent: u8,

    /// Repeat the watermark on a grid covering the whole image.
    #[serde(default)]
    pub tiled: bool,
}

fn default_color_hex() -> String {
    "#ffffff".to_string()
}

fn default_opacity() -> u8 {
    50
}

fn default_padding() -> u8 {
    2
}

fn default_size() -> u8 {
    5
}

impl WatermarkSettings {
    /// Settings for the given text and font with all other fields defaulted.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(text: S, font: P) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            color_hex: default_color_hex(),
            opacity_percent: default_opacity(),
            rotation_degrees: 0.0,
            padding_percent: default_padding(),
            size_percent: default_size(),
            tiled: false,
        }
    }
}

/// Crop rectangle in source pixel coordinates.
///
/// Out-of-bounds rectangles are clamped to the image at apply time; a
/// zero-sized extent is rejected at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
