use std::fmt;

use serde::{Deserialize, Serialize};

/// Counts produced by a successful merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Incoming records appended as new entries.
    pub added: usize,
    /// Incoming records overlaid onto an existing entry.
    pub updated: usize,
    /// Records in the primary store after the write.
    pub records: usize,
    /// Whether a pre-existing primary store was backed up.
    pub backed_up: bool,
}

impl MergeReport {
    /// Incoming records processed.
    pub fn total(&self) -> usize {
        self.added + self.updated
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added: {}, Updated: {}", self.added, self.updated)
    }
}

/// Result of [`Merger::run`](crate::Merger::run): never an `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(MergeReport),
    Failed(String),
}

impl MergeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Merged(_))
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merged(report) => write!(f, "Merge successful. {report}"),
            Self::Failed(message) => write!(f, "Error merging exercises: {message}"),
        }
    }
}
