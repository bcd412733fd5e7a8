//! Pixforge - batch image-conversion pipeline
//!
//! A front-end-agnostic core for batch image conversion: an ordered catalog
//! of source files, a transform-parameter value object, and a sequential
//! conversion job that applies scale, watermark, and crop transforms, encodes
//! to the chosen format, reports fractional progress between files, and
//! collects per-file failures into a terminal report.
//!
//! Front ends (GUI or otherwise) populate the [`Catalog`] and
//! [`TransformParameters`], start a [`ConversionJob`], and render the
//! progress events and the final [`Report`].

pub mod catalog;
pub mod codec;
pub mod convert;
pub mod params;
pub mod transform;

pub use catalog::{Catalog, SourceFile};
pub use convert::{
    CancelToken, ConversionJob, FileOutcome, JobStatus, ProgressCallback, ProgressEvent, Report,
};
pub use params::{CropRect, TransformParameters, WatermarkSettings};
pub use pixforge_common::{Error, JobId, OutputFormat, Result, ScaleMode};
