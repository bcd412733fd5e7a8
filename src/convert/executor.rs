//! Conversion job executor.
//!
//! Runs a catalog snapshot through decode → transforms → encode, one file at
//! a time, collecting per-file outcomes and reporting progress between files.

use chrono::Utc;
use pixforge_common::{Error, JobId, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{FileOutcome, JobStatus, ProgressEvent, Report};
use crate::catalog::{Catalog, SourceFile};
use crate::codec;
use crate::params::{self, TransformParameters};
use crate::transform::{self, Watermark};

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent) + Send + Sync>;

/// Cooperative cancellation flag shared between a job and its front end.
///
/// Cancellation is honored between files: the job stops before opening the
/// next file and returns a partial report.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation before the next file is opened.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Sequential conversion job over a catalog snapshot.
///
/// An explicitly constructed context: holds the parameter snapshot, an
/// optional progress callback, and a cancel token. `run` validates the
/// parameters, then processes files in catalog order; decode/encode failures
/// are recorded per file and never abort the batch.
pub struct ConversionJob {
    params: TransformParameters,
    cancel: CancelToken,
    running: AtomicBool,
    progress_callback: Option<ProgressCallback>,
}

impl ConversionJob {
    /// Create a job from a parameters snapshot.
    pub fn new(params: TransformParameters) -> Self {
        Self {
            params,
            cancel: CancelToken::new(),
            running: AtomicBool::new(false),
            progress_callback: None,
        }
    }

    /// Register a callback invoked after each file with a progress event.
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Get a clone of the cancel token for external control.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The parameter snapshot this job runs with.
    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    /// Run the job over a catalog snapshot.
    ///
    /// Usage errors (invalid parameters, a run already in flight) surface
    /// synchronously before any file is processed. Per-file failures are
    /// collected into the returned [`Report`].
    pub fn run(&self, catalog: &Catalog) -> Result<Report> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(Error::Busy);
        }
        let result = self.run_inner(catalog);
        self.running.store(false, Ordering::SeqCst);
        result
    }

    fn run_inner(&self, catalog: &Catalog) -> Result<Report> {
        params::validate(&self.params)?;
        let watermark = match &self.params.watermark {
            Some(settings) => Some(Watermark::prepare(settings)?),
            None => None,
        };

        self.cancel.reset();
        let job_id = JobId::new();
        let started_at = Utc::now();
        let total = catalog.len();

        info!(
            "Conversion job {} started: {} files -> {:?} as {}",
            job_id, total, self.params.destination_dir, self.params.output_format
        );

        let mut outcomes = Vec::with_capacity(total);
        let mut status = JobStatus::Completed;

        for (position, file) in catalog.iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!(
                    "Conversion job {} cancelled after {} of {} files",
                    job_id, position, total
                );
                status = JobStatus::Cancelled;
                break;
            }

            let outcome = self.process_file(file, watermark.as_ref());
            match &outcome {
                FileOutcome::Converted { output, .. } => {
                    debug!("Converted {:?} -> {:?}", file.path(), output);
                }
                FileOutcome::Failed { error, .. } => {
                    warn!("Skipped {:?}: {}", file.path(), error);
                }
            }
            outcomes.push(outcome);

            self.report_progress(&ProgressEvent {
                position,
                total,
                file_name: file.name().to_string(),
            });
        }

        let report = Report {
            job_id,
            status,
            outcomes,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "Conversion job {} {}: {} converted, {} failed",
            job_id,
            if report.is_cancelled() {
                "cancelled"
            } else {
                "completed"
            },
            report.converted(),
            report.failed()
        );

        Ok(report)
    }

    fn process_file(&self, file: &SourceFile, watermark: Option<&Watermark>) -> FileOutcome {
        match self.convert_file(file, watermark) {
            Ok(output) => FileOutcome::Converted {
                source: file.path().to_path_buf(),
                output,
            },
            Err(e) => FileOutcome::Failed {
                source: file.path().to_path_buf(),
                error: e.to_string(),
            },
        }
    }

    fn convert_file(&self, file: &SourceFile, watermark: Option<&Watermark>) -> Result<PathBuf> {
        let output = self.output_path(file);

        let img = codec::decode(file.path())?;
        let img = transform::apply(img, &self.params, watermark);

        // Last writer wins; surfaced so front ends can warn about collisions.
        if output.exists() {
            warn!("Overwriting existing output: {:?}", output);
        }
        codec::encode(&img, &output, self.params.output_format, self.params.quality)?;

        Ok(output)
    }

    /// Destination path: source stem with the output format's extension,
    /// placed directly in the destination directory.
    fn output_path(&self, file: &SourceFile) -> PathBuf {
        let stem = file
            .path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        self.params.destination_dir.join(format!(
            "{}.{}",
            stem,
            self.params.output_format.extension()
        ))
    }

    fn report_progress(&self, event: &ProgressEvent) {
        if let Some(ref cb) = self.progress_callback {
            cb(event);
        }
        info!("[{:.0}%] {}", event.fraction() * 100.0, event.file_name);
    }
}
