//! Common error types used throughout pixforge.
//!
//! This module provides a unified error type covering catalog usage errors,
//! parameter validation failures, and per-file decode/encode failures.

use std::path::PathBuf;

/// Common error type for pixforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file reference could not be parsed into a local path.
    #[error("Invalid file reference: {0}")]
    InvalidReference(String),

    /// A catalog index was out of range.
    #[error("Index {index} out of range for catalog of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The destination directory is missing, not a directory, or not writable.
    #[error("Invalid destination directory: {0}")]
    InvalidDestination(String),

    /// The encode quality is outside the accepted range.
    #[error("Invalid quality {0}: must be between 0 and 100")]
    InvalidQuality(u8),

    /// The crop rectangle has a zero-sized extent.
    #[error("Invalid crop rectangle: {0}")]
    InvalidCrop(String),

    /// The watermark settings could not be prepared (bad color, missing font).
    #[error("Invalid watermark: {0}")]
    InvalidWatermark(String),

    /// A conversion job is already running on this executor.
    #[error("A conversion job is already running")]
    Busy,

    /// A source file could not be opened or decoded.
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// An output file could not be encoded or written.
    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidReference error.
    pub fn invalid_reference<S: Into<String>>(msg: S) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Create a new InvalidDestination error.
    pub fn invalid_destination<S: Into<String>>(msg: S) -> Self {
        Self::InvalidDestination(msg.into())
    }

    /// Create a new InvalidCrop error.
    pub fn invalid_crop<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCrop(msg.into())
    }

    /// Create a new InvalidWatermark error.
    pub fn invalid_watermark<S: Into<String>>(msg: S) -> Self {
        Self::InvalidWatermark(msg.into())
    }

    /// Create a new Decode error for a source file.
    pub fn decode<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self::Decode {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a new Encode error for an output file.
    pub fn encode<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self::Encode {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Whether this error is a per-file processing error (recorded in the
    /// report) rather than a usage error (surfaced to the caller).
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Encode { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
