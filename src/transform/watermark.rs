//! Watermark stage: text composited onto images.
//!
//! The text is drawn onto a transparent square stamp large enough to hold it
//! at any rotation, rotated about its center, alpha-scaled to the requested
//! opacity, and composited: once in the bottom-right corner, or on a grid
//! covering the image when tiled.

use ab_glyph::{FontVec, PxScale};
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use pixforge_common::{Error, Result};

use crate::params::WatermarkSettings;

/// A watermark prepared for repeated application.
///
/// Preparing loads the font file and parses the color once per job; failures
/// are usage errors raised before any file is processed.
#[derive(Debug)]
pub struct Watermark {
    settings: WatermarkSettings,
    font: FontVec,
    color: Rgba<u8>,
}

impl Watermark {
    /// Load the font and parse the color from the settings.
    pub fn prepare(settings: &WatermarkSettings) -> Result<Self> {
        if settings.text.is_empty() {
            return Err(Error::invalid_watermark("text is empty"));
        }

        let color = parse_color_hex(&settings.color_hex)?;

        let bytes = std::fs::read(&settings.font).map_err(|e| {
            Error::invalid_watermark(format!(
                "cannot read font {}: {}",
                settings.font.display(),
                e
            ))
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|e| {
            Error::invalid_watermark(format!(
                "cannot parse font {}: {}",
                settings.font.display(),
                e
            ))
        })?;

        Ok(Self {
            settings: settings.clone(),
            font,
            color,
        })
    }

    /// Composite the watermark onto an image.
    pub fn apply(&self, img: DynamicImage) -> DynamicImage {
        let mut base = img.to_rgba8();
        let (width, height) = base.dimensions();
        let short_side = width.min(height);

        let glyph_px =
            (f32::from(self.settings.size_percent) / 100.0 * short_side as f32).max(4.0);
        let padding =
            (f32::from(self.settings.padding_percent) / 100.0 * short_side as f32).round() as i64;

        let stamp = self.render_stamp(PxScale::from(glyph_px));
        if stamp.width() == 0 || stamp.height() == 0 {
            return DynamicImage::ImageRgba8(base);
        }

        if self.settings.tiled {
            let step_x = i64::from(stamp.width()) + padding.max(0);
            let step_y = i64::from(stamp.height()) + padding.max(0);
            let mut y = 0;
            while y < i64::from(height) {
                let mut x = 0;
                while x < i64::from(width) {
                    imageops::overlay(&mut base, &stamp, x, y);
                    x += step_x;
                }
                y += step_y;
            }
        } else {
            let x = i64::from(width) - i64::from(stamp.width()) - padding;
            let y = i64::from(height) - i64::from(stamp.height()) - padding;
            imageops::overlay(&mut base, &stamp, x, y);
        }

        DynamicImage::ImageRgba8(base)
    }

    /// Render the rotated, opacity-scaled text block on a transparent canvas.
    fn render_stamp(&self, scale: PxScale) -> RgbaImage {
        let (text_w, text_h) = text_size(scale, &self.font, &self.settings.text);
        if text_w == 0 || text_h == 0 {
            return RgbaImage::new(0, 0);
        }

        // Square stamp sized to the text diagonal so no rotation clips it.
        let side = f64::from(text_w)
            .hypot(f64::from(text_h))
            .ceil() as u32;
        let mut stamp = RgbaImage::new(side, side);
        draw_text_mut(
            &mut stamp,
            self.color,
            ((side - text_w) / 2) as i32,
            ((side - text_h) / 2) as i32,
            scale,
            &self.font,
            &self.settings.text,
        );

        let mut stamp = if self.settings.rotation_degrees != 0.0 {
            rotate_about_center(
                &stamp,
                self.settings.rotation_degrees.to_radians(),
                Interpolation::Bilinear,
                Rgba([0, 0, 0, 0]),
            )
        } else {
            stamp
        };

        let opacity = u16::from(self.settings.opacity_percent.min(100));
        for pixel in stamp.pixels_mut() {
            pixel[3] = ((u16::from(pixel[3]) * opacity) / 100) as u8;
        }
        stamp
    }
}

/// Parse a `#rrggbb` hex string into an opaque color.
fn parse_color_hex(hex: &str) -> Result<Rgba<u8>> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    let value = match raw.len() {
        6 => u32::from_str_radix(raw, 16).ok(),
        _ => None,
    }
    .ok_or_else(|| Error::invalid_watermark(format!("bad color hex: {}", hex)))?;

    Ok(Rgba([
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
        255,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color_hex("#ffffff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_color_hex("#102030").unwrap(), Rgba([16, 32, 48, 255]));
        assert_eq!(parse_color_hex("a0b0c0").unwrap(), Rgba([160, 176, 192, 255]));
    }

    #[test]
    fn test_parse_color_hex_rejects_malformed() {
        assert_matches!(parse_color_hex("#fff").unwrap_err(), Error::InvalidWatermark(_));
        assert_matches!(parse_color_hex("#gggggg").unwrap_err(), Error::InvalidWatermark(_));
        assert_matches!(parse_color_hex("").unwrap_err(), Error::InvalidWatermark(_));
    }

    #[test]
    fn test_prepare_rejects_empty_text() {
        let settings = WatermarkSettings::new("", "/fonts/Sans.ttf");
        assert_matches!(
            Watermark::prepare(&settings).unwrap_err(),
            Error::InvalidWatermark(_)
        );
    }

    #[test]
    fn test_prepare_rejects_bad_color_before_touching_font() {
        let mut settings = WatermarkSettings::new("draft", "/no/such/font.ttf");
        settings.color_hex = "nope".to_string();
        assert_matches!(
            Watermark::prepare(&settings).unwrap_err(),
            Error::InvalidWatermark(_)
        );
    }

    #[test]
    fn test_prepare_rejects_missing_font() {
        let settings = WatermarkSettings::new("draft", "/no/such/font.ttf");
        assert_matches!(
            Watermark::prepare(&settings).unwrap_err(),
            Error::InvalidWatermark(_)
        );
    }

    #[test]
    fn test_prepare_rejects_non_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let settings = WatermarkSettings::new("draft", &path);
        assert_matches!(
            Watermark::prepare(&settings).unwrap_err(),
            Error::InvalidWatermark(_)
        );
    }
}
