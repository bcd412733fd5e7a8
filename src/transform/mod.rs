//! In-memory transform stages applied between decode and encode.
//!
//! Stages run in a fixed order (scale, then watermark, then crop) and each
//! stage is a no-op when its parameters are absent. Pixel work is delegated
//! to the image capability; this module only owns ordering and parameter
//! mapping.

pub mod scale;
pub mod watermark;

pub use watermark::Watermark;

use image::DynamicImage;

use crate::params::{CropRect, TransformParameters};

/// Apply the enabled transform stages to an image.
///
/// The watermark is prepared once per job (font load, color parse) and passed
/// in here so per-file work stays cheap.
pub fn apply(
    img: DynamicImage,
    params: &TransformParameters,
    watermark: Option<&Watermark>,
) -> DynamicImage {
    let img = scale::apply(img, &params.scale);
    let img = match watermark {
        Some(wm) => wm.apply(img),
        None => img,
    };
    match &params.crop {
        Some(rect) => apply_crop(img, rect),
        None => img,
    }
}

/// Extract the crop rectangle, clamped to the image bounds.
pub fn apply_crop(img: DynamicImage, rect: &CropRect) -> DynamicImage {
    let (x, y, width, height) = clamp_crop(rect, img.width(), img.height());
    img.crop_imm(x, y, width, height)
}

/// Clamp a crop rectangle to an image of the given dimensions.
///
/// The origin is clamped into the image, then the extent is clamped to what
/// remains, so a fully out-of-bounds rectangle degenerates to a one-pixel
/// strip at the edge instead of failing.
fn clamp_crop(rect: &CropRect, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let x = rect.x.min(width.saturating_sub(1));
    let y = rect.y.min(height.saturating_sub(1));
    let w = rect.width.min(width - x);
    let h = rect.height.min(height - y);
    (x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pixforge_common::ScaleMode;

    fn test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            width,
            height,
            Rgba([10, 20, 30, 255]),
        ))
    }

    #[test]
    fn test_clamp_crop_inside_bounds() {
        let rect = CropRect {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
        };
        assert_eq!(clamp_crop(&rect, 100, 100), (10, 20, 30, 40));
    }

    #[test]
    fn test_clamp_crop_extent_overflow() {
        let rect = CropRect {
            x: 80,
            y: 90,
            width: 50,
            height: 50,
        };
        assert_eq!(clamp_crop(&rect, 100, 100), (80, 90, 20, 10));
    }

    #[test]
    fn test_clamp_crop_origin_outside() {
        let rect = CropRect {
            x: 500,
            y: 500,
            width: 10,
            height: 10,
        };
        assert_eq!(clamp_crop(&rect, 100, 100), (99, 99, 1, 1));
    }

    #[test]
    fn test_apply_crop_dimensions() {
        let img = test_image(100, 80);
        let cropped = apply_crop(
            img,
            &CropRect {
                x: 5,
                y: 5,
                width: 20,
                height: 10,
            },
        );
        assert_eq!((cropped.width(), cropped.height()), (20, 10));
    }

    #[test]
    fn test_stage_order_scale_then_crop() {
        // Crop coordinates are interpreted in the scaled image, not the
        // source: a 40x40 crop of a 200x100 image scaled to 100x50 clamps to
        // the scaled bounds.
        let params = TransformParameters {
            scale: ScaleMode::ByLongestSide { size: 100 },
            crop: Some(CropRect {
                x: 60,
                y: 0,
                width: 40,
                height: 40,
            }),
            ..Default::default()
        };

        let out = apply(test_image(200, 100), &params, None);
        assert_eq!((out.width(), out.height()), (40, 40));
    }
}
