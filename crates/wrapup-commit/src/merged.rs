//! Merged report entry.

use serde::{Deserialize, Serialize};

use crate::{AnalyzedCommit, CommitType, ParsedCommit};

/// One report line standing for one or more related commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    /// Classification of the representative commit.
    pub parsed: ParsedCommit,

    /// Raw message of the representative commit.
    pub message: String,

    /// De-duplicated, non-trivial descriptions of the folded commits.
    ///
    /// Empty unless at least two distinct details survived filtering.
    pub details: Vec<String>,

    /// Number of raw commits folded into this entry.
    pub occurrence_count: usize,
}

impl MergedEntry {
    /// Wraps a single commit with no details.
    #[must_use]
    pub fn single(commit: &AnalyzedCommit) -> Self {
        Self {
            parsed: commit.parsed.clone(),
            message: commit.record.message.clone(),
            details: Vec::new(),
            occurrence_count: 1,
        }
    }

    /// Returns the commit type of the representative.
    #[must_use]
    pub fn commit_type(&self) -> &CommitType {
        &self.parsed.commit_type
    }

    /// Returns the sort priority of the representative.
    #[must_use]
    pub fn priority(&self) -> u8 {
        self.parsed.priority
    }
}
