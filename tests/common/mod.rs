//! Shared fixtures for pipeline integration tests.
//!
//! Provides tracing setup plus helpers that write small real PNG images (and
//! deliberately corrupt ones) into temp directories for end-to-end runs.

use image::{DynamicImage, ImageFormat, Rgba};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise tracing once per test binary, honoring `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Write a real PNG test image with the given dimensions.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

/// Write a file that claims to be a PNG but is not decodable.
pub fn write_corrupt_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG corrupt payload").unwrap();
    path
}
