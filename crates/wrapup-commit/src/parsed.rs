//! Classification derived from a commit message.

use serde::{Deserialize, Serialize};

use crate::{CommitRecord, CommitType};

/// A commit message after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The commit type.
    pub commit_type: CommitType,

    /// The optional scope.
    pub scope: Option<String>,

    /// The description (the message without its conventional prefix).
    pub description: String,

    /// Whether the message matched a trivial-commit rule.
    pub trivial: bool,

    /// Default highlight flag of the type.
    pub highlight: bool,

    /// Default challenge flag of the type.
    pub challenge: bool,

    /// Display label of the type.
    pub label: String,

    /// Sort priority of the type, lower sorts first.
    pub priority: u8,
}

impl ParsedCommit {
    /// Creates a classification, filling the profile-derived fields from the type.
    #[must_use]
    pub fn new(
        commit_type: CommitType,
        scope: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        let profile = commit_type.profile();
        Self {
            commit_type,
            scope,
            description: description.into(),
            trivial: false,
            highlight: profile.highlight,
            challenge: profile.challenge,
            label: profile.label.to_string(),
            priority: profile.priority,
        }
    }

    /// Sets the trivial flag.
    #[must_use]
    pub fn trivial(mut self, trivial: bool) -> Self {
        self.trivial = trivial;
        self
    }
}

/// A commit record paired with the classification of its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedCommit {
    /// The record as retrieved from Git.
    pub record: CommitRecord,

    /// The classification of `record.message`.
    pub parsed: ParsedCommit,
}

impl AnalyzedCommit {
    /// Pairs a record with its classification.
    #[must_use]
    pub fn new(record: CommitRecord, parsed: ParsedCommit) -> Self {
        Self { record, parsed }
    }

    /// Returns the raw commit message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.record.message
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.record.project
    }

    /// Returns the commit type.
    #[must_use]
    pub fn commit_type(&self) -> &CommitType {
        &self.parsed.commit_type
    }
}
