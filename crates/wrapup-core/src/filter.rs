//! Whole-commit and detail-line triviality.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use wrapup_commit::{AnalyzedCommit, DiffStats};
use wrapup_config::FilterConfig;

/// Details equal to one of these say nothing.
const TRIVIAL_DETAIL_PHRASES: &[&str] = &["完善相关文档", "代码清理", "样式优化"];

/// Busywork markers for short details.
const TRIVIAL_DETAIL_KEYWORDS: &[&str] = &[
    "完善",
    "更新文档",
    "调整样式",
    "优化格式",
    "移除日志",
    "删除调试",
    "代码清理",
    "清理代码",
    "移除调试",
    "删除日志",
];

/// Details shorter than this many characters are checked for busywork keywords.
const SHORT_DETAIL_CHARS: usize = 8;

/// Why a commit was left out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The message matched a trivial-message rule.
    Message,

    /// Fewer lines changed than the threshold. Holds the changed-line count.
    SmallChange(usize),

    /// Every changed file is infrastructure noise.
    TrivialFiles,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "trivial message"),
            Self::SmallChange(lines) => write!(f, "small change ({lines} lines)"),
            Self::TrivialFiles => write!(f, "only trivial files"),
        }
    }
}

/// Decides whether whole commits are dropped.
///
/// Any one signal is enough. Missing diff data never counts as small and an
/// unknown file list never counts as all-trivial.
#[derive(Debug, Clone)]
pub struct TrivialFilter {
    small_change_threshold: usize,
    trivial_files: HashSet<String>,
}

impl TrivialFilter {
    /// Builds the filter from configuration.
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            small_change_threshold: config.small_change_threshold,
            trivial_files: config.trivial_files.iter().cloned().collect(),
        }
    }

    /// Returns the first signal that excludes the commit.
    #[must_use]
    pub fn exclusion(&self, commit: &AnalyzedCommit) -> Option<Exclusion> {
        if commit.parsed.trivial {
            return Some(Exclusion::Message);
        }

        let diff = &commit.record.diff;
        if self.is_small(diff) {
            return Some(Exclusion::SmallChange(diff.total_changes));
        }

        if self.only_trivial_files(&commit.record.files) {
            return Some(Exclusion::TrivialFiles);
        }

        None
    }

    /// Returns true if the commit should be left out of the report.
    #[must_use]
    pub fn is_excluded(&self, commit: &AnalyzedCommit) -> bool {
        self.exclusion(commit).is_some()
    }

    /// Returns true if the list is non-empty and every file is in the trivial set.
    #[must_use]
    pub fn only_trivial_files(&self, files: &[String]) -> bool {
        !files.is_empty() && files.iter().all(|file| self.is_trivial_file(file))
    }

    fn is_trivial_file(&self, path: &str) -> bool {
        Path::new(path)
            .file_name()
            .is_some_and(|name| self.trivial_files.contains(name.to_string_lossy().as_ref()))
    }

    // All-zero stats mean the lookup failed or was skipped.
    fn is_small(&self, diff: &DiffStats) -> bool {
        if *diff == DiffStats::unavailable() {
            return false;
        }
        diff.is_small_change || diff.total_changes < self.small_change_threshold
    }
}

impl Default for TrivialFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

/// Returns true if a detail line is noise not worth listing under an entry.
#[must_use]
pub fn is_trivial_detail(detail: &str) -> bool {
    if TRIVIAL_DETAIL_PHRASES.contains(&detail) {
        return true;
    }

    detail.chars().count() < SHORT_DETAIL_CHARS
        && TRIVIAL_DETAIL_KEYWORDS
            .iter()
            .any(|keyword| detail.contains(keyword))
}
