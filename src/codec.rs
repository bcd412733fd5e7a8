//! Decode and encode wrappers around the external image capability.
//!
//! The pipeline does not define pixel-level algorithms; this module maps
//! source paths to in-memory images and in-memory images to encoded output
//! files, normalizing failures into the per-file error taxonomy.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use pixforge_common::{Error, OutputFormat, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Map an output format to the encoder format of the image capability.
pub fn image_format(format: OutputFormat) -> ImageFormat {
    match format {
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Webp => ImageFormat::WebP,
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Gif => ImageFormat::Gif,
        OutputFormat::Bmp => ImageFormat::Bmp,
        OutputFormat::Tiff => ImageFormat::Tiff,
        OutputFormat::Ico => ImageFormat::Ico,
    }
}

/// Open and decode a source file.
///
/// The format is sniffed from content, not the extension, so misnamed files
/// still decode. Missing, corrupt, and unsupported files all surface as
/// [`Error::Decode`].
pub fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| Error::decode(path, e.to_string()))
}

/// Encode an image to `path` at the given format and quality.
///
/// JPEG is the only format where quality applies; JPEG output is flattened to
/// RGB since the format carries no alpha channel. WEBP is encoded lossless.
/// GIF and ICO encoders want RGBA input, so sources are converted. Any
/// encoder or filesystem failure surfaces as [`Error::Encode`].
pub fn encode(
    img: &DynamicImage,
    path: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    match format {
        OutputFormat::Jpeg => {
            let file = File::create(path).map_err(|e| Error::encode(path, e.to_string()))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| Error::encode(path, e.to_string()))
        }
        OutputFormat::Gif | OutputFormat::Ico | OutputFormat::Webp => img
            .to_rgba8()
            .save_with_format(path, image_format(format))
            .map_err(|e| Error::encode(path, e.to_string())),
        OutputFormat::Bmp => img
            .to_rgb8()
            .save_with_format(path, image_format(format))
            .map_err(|e| Error::encode(path, e.to_string())),
        OutputFormat::Png | OutputFormat::Tiff => img
            .save_with_format(path, image_format(format))
            .map_err(|e| Error::encode(path, e.to_string())),
    }
}
