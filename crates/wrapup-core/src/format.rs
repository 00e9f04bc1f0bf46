//! Project and supplement section rendering.

use wrapup_commit::MergedEntry;
use wrapup_config::Config;

use crate::{Summarizer, analyze_work_significance};

const ENTRY_INDENT: &str = "  - ";
const DETAIL_INDENT: &str = "    - ";

/// Renders report sections with the configured bounds.
#[derive(Debug, Clone, Copy)]
pub struct SectionFormatter<'a> {
    config: &'a Config,
    summarizer: Summarizer,
}

impl<'a> SectionFormatter<'a> {
    /// Creates a formatter for the given configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            summarizer: Summarizer::new(config.report.render_labels),
        }
    }

    /// Renders one project: its name, then one line per entry with its details.
    ///
    /// Highlights get the longest summaries, challenges the next longest.
    /// Either kind keeps up to `significant_limit` details, other entries up to
    /// `normal_limit`.
    #[must_use]
    pub fn format_project_section(&self, project: &str, entries: &[MergedEntry]) -> String {
        let summary = &self.config.summary;
        let limits = &self.config.details;
        let mut lines = vec![project.to_string()];

        for entry in entries {
            let significance = analyze_work_significance(entry);
            let max_chars = if significance.highlight {
                summary.highlight_max
            } else if significance.challenge {
                summary.challenge_max
            } else {
                summary.normal_max
            };
            let detail_limit = if significance.is_significant() {
                limits.significant_limit
            } else {
                limits.normal_limit
            };

            let line = self
                .summarizer
                .summarize(&entry.message, max_chars, &entry.parsed.label);
            lines.push(format!("{ENTRY_INDENT}{line}"));

            lines.extend(
                entry
                    .details
                    .iter()
                    .take(detail_limit)
                    .map(|detail| format!("{DETAIL_INDENT}{detail}")),
            );
        }

        lines.join("\n")
    }

    /// Renders the supplements heading followed by each item unchanged.
    #[must_use]
    pub fn format_other_section(&self, supplements: &[String]) -> String {
        std::iter::once(self.config.report.other_heading.clone())
            .chain(supplements.iter().map(|item| format!("{ENTRY_INDENT}{item}")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
