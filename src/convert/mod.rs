//! Conversion job module.
//!
//! This module runs a catalog snapshot through the transform pipeline, one
//! file at a time. It includes:
//!
//! - The sequential job executor with parameter validation at start
//! - Progress events emitted between files
//! - Cooperative cancellation honored before each file is opened
//! - The terminal report collecting per-file outcomes in catalog order

mod executor;
mod types;

pub use executor::{CancelToken, ConversionJob, ProgressCallback};
pub use types::{FileOutcome, JobStatus, ProgressEvent, Report};
