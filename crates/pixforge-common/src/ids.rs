//! Typed ID wrappers for type safety across pixforge.
//!
//! This module provides a newtype wrapper around UUIDs so job identifiers
//! cannot be confused with other strings or IDs at API boundaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a conversion job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Generate a new random job ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for JobId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<JobId> for Uuid {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_ids_are_unique() {
        assert_ne!(JobId::new(), JobId::new());
    }

    #[test]
    fn test_display_roundtrip() {
        let id = JobId::new();
        let uuid: Uuid = id.into();
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
