//! Core library for Wrapup.
//!
//! This crate turns commit records into a condensed activity report:
//! messages are classified, trivial commits dropped, related commits merged
//! and every project rendered as a short outline.

mod filter;
mod format;
mod keywords;
mod merge;
mod parser;
mod report;
mod significance;
mod summary;

pub use filter::{Exclusion, TrivialFilter, is_trivial_detail};
pub use format::SectionFormatter;
pub use keywords::{GroupKey, MAX_KEYWORDS, extract_keywords};
pub use merge::merge_related_commits;
pub use parser::{analyze_commit, clean_commit_message, parse_commit_message, trivial_reason};
pub use report::{ReportGenerator, group_commits_by_project};
pub use significance::{Significance, analyze_work_significance};
pub use summary::{ELLIPSIS, Summarizer, truncate_at_break};
