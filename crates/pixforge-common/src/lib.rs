//! Pixforge-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across pixforge:
//!
//! - **Typed IDs**: Type-safe UUID wrapper for conversion jobs
//! - **Core Types**: Enums for output formats and scale modes
//! - **Path Utilities**: Functions to detect image files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use pixforge_common::{JobId, OutputFormat, Error, Result};
//! use pixforge_common::paths::is_image_file;
//! use std::path::Path;
//!
//! // Create typed IDs
//! let job_id = JobId::new();
//!
//! // Work with output formats
//! let format = OutputFormat::Jpeg;
//! assert_eq!(format.extension(), "jpg");
//!
//! // Check file types
//! assert!(is_image_file(Path::new("photo.png")));
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::invalid_reference("not a file path"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
