//! Transform parameters: the configuration value object for one run.
//!
//! Parameters are plain data with TOML persistence so front ends can remember
//! the last-used settings. Validation happens at job start, not at field-set
//! time, so the front end can hold partially edited states.

mod types;

pub use types::*;

use anyhow::{Context, Result};
use pixforge_common::Error;
use std::path::Path;

/// Validate parameters before a job starts.
///
/// Checks the destination directory (exists, is a directory, writable; the
/// writability check creates and discards a temp file so real permissions are
/// exercised), the quality range, and the crop extent. Watermark settings are
/// validated separately when the job prepares the watermark, since that is
/// also where the font is loaded.
pub fn validate(params: &TransformParameters) -> pixforge_common::Result<()> {
    if params.quality > 100 {
        return Err(Error::InvalidQuality(params.quality));
    }

    if let Some(crop) = &params.crop {
        if crop.width == 0 || crop.height == 0 {
            return Err(Error::invalid_crop(format!(
                "extent {}x{} must be positive",
                crop.width, crop.height
            )));
        }
    }

    let dest = &params.destination_dir;
    if !dest.exists() {
        return Err(Error::invalid_destination(format!(
            "{} does not exist",
            dest.display()
        )));
    }
    if !dest.is_dir() {
        return Err(Error::invalid_destination(format!(
            "{} is not a directory",
            dest.display()
        )));
    }
    tempfile::tempfile_in(dest).map_err(|e| {
        Error::invalid_destination(format!("{} is not writable: {}", dest.display(), e))
    })?;

    Ok(())
}

/// Load parameters from a TOML file.
pub fn load_params(path: &Path) -> Result<TransformParameters> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters file: {:?}", path))?;

    let params: TransformParameters = toml::from_str(&content)
        .with_context(|| format!("Failed to parse parameters file: {:?}", path))?;

    if !params.destination_dir.exists() {
        tracing::warn!(
            "Destination directory does not exist: {:?}",
            params.destination_dir
        );
    }

    Ok(params)
}

/// Load parameters from default locations or return defaults.
pub fn load_params_or_default(custom_path: Option<&Path>) -> Result<TransformParameters> {
    if let Some(path) = custom_path {
        return load_params(path);
    }

    // Try default locations
    let default_paths = ["./pixforge.toml", "~/.config/pixforge/params.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_params(path);
        }
    }

    Ok(TransformParameters::default())
}

/// Save parameters to a TOML file, creating parent directories as needed.
pub fn save_params(path: &Path, params: &TransformParameters) -> Result<()> {
    let content = toml::to_string_pretty(params).context("Failed to serialize parameters")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create parameters directory: {:?}", parent))?;
        }
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write parameters file: {:?}", path))?;

    Ok(())
}
