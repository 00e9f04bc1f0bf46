//! Commit record as retrieved from Git.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Changes below this many lines (insertions + deletions) count as small.
pub const SMALL_CHANGE_THRESHOLD: usize = 10;

/// Diff statistics of a single commit.
///
/// A failed or skipped lookup is represented by [`DiffStats::unavailable`],
/// which is all zero and never counts as a small change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of files touched.
    pub files_changed: usize,

    /// Lines added.
    pub insertions: usize,

    /// Lines removed.
    pub deletions: usize,

    /// `insertions + deletions`.
    pub total_changes: usize,

    /// Whether `total_changes` is below the small-change threshold.
    pub is_small_change: bool,
}

impl DiffStats {
    /// Creates statistics using [`SMALL_CHANGE_THRESHOLD`].
    #[must_use]
    pub fn new(files_changed: usize, insertions: usize, deletions: usize) -> Self {
        Self::with_threshold(files_changed, insertions, deletions, SMALL_CHANGE_THRESHOLD)
    }

    /// Creates statistics with a custom small-change threshold.
    #[must_use]
    pub fn with_threshold(
        files_changed: usize,
        insertions: usize,
        deletions: usize,
        threshold: usize,
    ) -> Self {
        let total_changes = insertions + deletions;
        Self {
            files_changed,
            insertions,
            deletions,
            total_changes,
            is_small_change: total_changes < threshold,
        }
    }

    /// Statistics for a commit whose diff could not be computed.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// A commit as retrieved from Git, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (SHA).
    pub hash: String,

    /// The commit message (subject line).
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The day the commit was authored.
    pub date: NaiveDate,

    /// The project (repository) this commit belongs to.
    pub project: String,

    /// Diff statistics.
    #[serde(default)]
    pub diff: DiffStats,

    /// Paths of the files touched by the commit. Empty when unknown.
    #[serde(default)]
    pub files: Vec<String>,
}

impl CommitRecord {
    /// Creates a new record without diff information.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        project: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: author.into(),
            date,
            project: project.into(),
            diff: DiffStats::unavailable(),
            files: Vec::new(),
        }
    }

    /// Sets the diff statistics.
    #[must_use]
    pub fn with_diff(mut self, diff: DiffStats) -> Self {
        self.diff = diff;
        self
    }

    /// Sets the touched file paths.
    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the first line of the commit message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.as_str(), |(idx, _)| &self.hash[..idx])
    }
}
