//! Scale stage: resize policies ahead of watermark and crop.

use image::imageops::FilterType;
use image::DynamicImage;
use pixforge_common::ScaleMode;

/// Compute the target dimensions for a scale mode, or `None` when the image
/// should be left untouched.
///
/// Aspect-preserving modes round the derived dimension half-up and never
/// produce a zero dimension.
pub fn target_dimensions(mode: &ScaleMode, width: u32, height: u32) -> Option<(u32, u32)> {
    match *mode {
        ScaleMode::None => None,
        ScaleMode::ExplicitDimensions {
            width: w,
            height: h,
        } => Some((w.max(1), h.max(1))),
        ScaleMode::ByWidth { width: w } => {
            let w = w.max(1);
            Some((w, derived(height, w, width)))
        }
        ScaleMode::ByHeight { height: h } => {
            let h = h.max(1);
            Some((derived(width, h, height), h))
        }
        ScaleMode::ByLongestSide { size } => {
            let size = size.max(1);
            if width >= height {
                Some((size, derived(height, size, width)))
            } else {
                Some((derived(width, size, height), size))
            }
        }
    }
}

/// Scale `dim` by `num/den`, rounding half-up, clamped to at least 1 pixel.
fn derived(dim: u32, num: u32, den: u32) -> u32 {
    let scaled = (f64::from(dim) * f64::from(num) / f64::from(den)).round() as u32;
    scaled.max(1)
}

/// Resize an image according to the scale mode.
pub fn apply(img: DynamicImage, mode: &ScaleMode) -> DynamicImage {
    match target_dimensions(mode, img.width(), img.height()) {
        Some((w, h)) if (w, h) != (img.width(), img.height()) => {
            img.resize_exact(w, h, FilterType::Lanczos3)
        }
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_leaves_dimensions() {
        assert_eq!(target_dimensions(&ScaleMode::None, 200, 100), None);
    }

    #[test]
    fn test_explicit_dimensions_ignore_aspect() {
        let mode = ScaleMode::ExplicitDimensions {
            width: 50,
            height: 300,
        };
        assert_eq!(target_dimensions(&mode, 200, 100), Some((50, 300)));
    }

    #[test]
    fn test_by_width_preserves_aspect() {
        let mode = ScaleMode::ByWidth { width: 50 };
        assert_eq!(target_dimensions(&mode, 200, 100), Some((50, 25)));
    }

    #[test]
    fn test_by_height_preserves_aspect() {
        let mode = ScaleMode::ByHeight { height: 50 };
        assert_eq!(target_dimensions(&mode, 200, 100), Some((100, 50)));
    }

    #[test]
    fn test_by_longest_side_landscape() {
        let mode = ScaleMode::ByLongestSide { size: 100 };
        assert_eq!(target_dimensions(&mode, 200, 100), Some((100, 50)));
    }

    #[test]
    fn test_by_longest_side_portrait() {
        let mode = ScaleMode::ByLongestSide { size: 100 };
        assert_eq!(target_dimensions(&mode, 100, 200), Some((50, 100)));
    }

    #[test]
    fn test_by_longest_side_square() {
        let mode = ScaleMode::ByLongestSide { size: 64 };
        assert_eq!(target_dimensions(&mode, 128, 128), Some((64, 64)));
    }

    #[test]
    fn test_rounding_half_up() {
        // 5 * 2/3 = 3.33 -> 3
        let mode = ScaleMode::ByWidth { width: 2 };
        assert_eq!(target_dimensions(&mode, 3, 5), Some((2, 3)));
    }

    #[test]
    fn test_derived_dimension_never_zero() {
        let mode = ScaleMode::ByWidth { width: 1 };
        assert_eq!(target_dimensions(&mode, 10_000, 10), Some((1, 1)));
    }

    #[test]
    fn test_apply_resizes_image() {
        let img = image::DynamicImage::new_rgba8(200, 100);
        let out = apply(img, &ScaleMode::ByLongestSide { size: 100 });
        assert_eq!((out.width(), out.height()), (100, 50));
    }

    #[test]
    fn test_apply_skips_when_dimensions_match() {
        let img = image::DynamicImage::new_rgba8(200, 100);
        let out = apply(
            img,
            &ScaleMode::ExplicitDimensions {
                width: 200,
                height: 100,
            },
        );
        assert_eq!((out.width(), out.height()), (200, 100));
    }
}
