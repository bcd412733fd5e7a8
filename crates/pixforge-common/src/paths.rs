//! Path utilities for detecting image files by extension.
//!
//! Front ends use these to filter file-open dialogs and drag-and-drop
//! payloads down to the formats the pipeline can read.

use std::path::Path;

/// List of image file extensions the pipeline can read.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

/// Check if a path has a readable image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pixforge_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("photo.jpg")));
/// assert!(is_image_file(Path::new("/path/to/scan.tiff")));
/// assert!(!is_image_file(Path::new("notes.txt")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Get the list of readable image file extensions.
///
/// # Examples
///
/// ```
/// use pixforge_common::paths::image_extensions;
///
/// let extensions = image_extensions();
/// assert!(extensions.contains(&"jpg"));
/// assert!(extensions.contains(&"webp"));
/// ```
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}
