use chrono::{DateTime, Utc};
use pixforge_common::JobId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Incremental notification of fractional completion during a run.
///
/// Emitted after each file, carrying the zero-based position of the file just
/// finished, so fractions run 0/n, 1/n, ... (n-1)/n: monotonically
/// non-decreasing and always below 1. The terminal [`Report`] signals
/// completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Zero-based index of the file just finished.
    pub position: usize,
    /// Number of files in the catalog snapshot.
    pub total: usize,
    /// Display name of the file just finished.
    pub file_name: String,
}

impl ProgressEvent {
    /// Fraction of completed positions, in [0, 1).
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f32 / self.total as f32
    }
}

/// Per-file outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was converted and written to `output`.
    Converted { source: PathBuf, output: PathBuf },
    /// The file was skipped after a decode or encode failure.
    Failed { source: PathBuf, error: String },
}

impl FileOutcome {
    /// Source file this outcome belongs to.
    pub fn source(&self) -> &Path {
        match self {
            Self::Converted { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    /// Whether the file converted successfully.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
    Cancelled,
}

/// Final per-file outcome summary of a completed or cancelled run.
///
/// Owned by the job for the duration of one run; the front end receives it by
/// value once the run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub job_id: JobId,
    pub status: JobStatus,
    /// Outcomes in catalog order. A cancelled run covers only the files
    /// processed before cancellation.
    pub outcomes: Vec<FileOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Report {
    /// Number of files processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files converted successfully.
    #[must_use]
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    /// Whether the run was cancelled before reaching the end of the catalog.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == JobStatus::Cancelled
    }

    /// Iterate over the failed outcomes, in catalog order.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_converted())
    }
}
