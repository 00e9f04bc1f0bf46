//! Highlight and challenge scoring.

use wrapup_commit::MergedEntry;

/// Final significance of a merged entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Significance {
    /// Key work: given more room in the report.
    pub highlight: bool,

    /// Hard work: given more detail lines in the report.
    pub challenge: bool,
}

impl Significance {
    /// Returns true if the entry is a highlight or a challenge.
    #[must_use]
    pub fn is_significant(self) -> bool {
        self.highlight || self.challenge
    }
}

/// Scores an entry from its type defaults and how many commits it folds.
///
/// Repeated feature work and any performance work are highlights. Repeated
/// fixes are challenges. Type defaults are never cleared.
#[must_use]
pub fn analyze_work_significance(entry: &MergedEntry) -> Significance {
    let commit_type = entry.commit_type();
    let repeated = entry.occurrence_count >= 2;

    Significance {
        highlight: entry.parsed.highlight
            || (commit_type.is_feature() && repeated)
            || commit_type.is_performance(),
        challenge: entry.parsed.challenge || (commit_type.is_fix() && repeated),
    }
}
