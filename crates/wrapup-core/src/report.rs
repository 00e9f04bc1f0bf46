//! Report assembly.

use std::collections::BTreeMap;

use tracing::{debug, info};
use wrapup_commit::{AnalyzedCommit, CommitRecord};
use wrapup_config::Config;

use crate::{
    Exclusion, SectionFormatter, TrivialFilter, analyze_commit, merge_related_commits,
    trivial_reason,
};

/// Project name used for commits that carry none.
const UNKNOWN_PROJECT: &str = "unknown";

const SECTION_SEPARATOR: &str = "\n\n";

/// Groups commits by project name, in name order.
#[must_use]
pub fn group_commits_by_project(
    commits: &[AnalyzedCommit],
) -> BTreeMap<String, Vec<&AnalyzedCommit>> {
    let mut by_project: BTreeMap<String, Vec<&AnalyzedCommit>> = BTreeMap::new();
    for commit in commits {
        let project = match commit.project() {
            "" => UNKNOWN_PROJECT,
            name => name,
        };
        by_project.entry(project.to_string()).or_default().push(commit);
    }
    by_project
}

/// Builds the plain-text activity report.
#[derive(Debug, Clone)]
pub struct ReportGenerator<'a> {
    config: &'a Config,
    filter: TrivialFilter,
    formatter: SectionFormatter<'a>,
}

impl<'a> ReportGenerator<'a> {
    /// Creates a generator for the given configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            filter: TrivialFilter::new(&config.filter),
            formatter: SectionFormatter::new(config),
        }
    }

    /// Renders the report body: one section per project, then the supplements.
    ///
    /// Trivial commits are dropped first. Returns an empty string when nothing
    /// is left to report.
    #[must_use]
    pub fn generate(&self, commits: &[CommitRecord], supplements: &[String]) -> String {
        let kept: Vec<AnalyzedCommit> = commits
            .iter()
            .cloned()
            .map(analyze_commit)
            .filter(|commit| self.keep(commit))
            .collect();

        debug!(
            total = commits.len(),
            kept = kept.len(),
            "filtered trivial commits"
        );

        let mut sections: Vec<String> = group_commits_by_project(&kept)
            .into_iter()
            .map(|(project, project_commits)| {
                let entries = merge_related_commits(&project_commits);
                info!(
                    %project,
                    commits = project_commits.len(),
                    entries = entries.len(),
                    "formatted project"
                );
                self.formatter.format_project_section(&project, &entries)
            })
            .collect();

        if !supplements.is_empty() {
            sections.push(self.formatter.format_other_section(supplements));
        }

        sections.join(SECTION_SEPARATOR)
    }

    /// Renders a full report from per-repository commits.
    ///
    /// Records without a project take their repository's name. When a date
    /// range is given and the body is not empty, a `# {title} ({range})`
    /// heading is prepended.
    #[must_use]
    pub fn generate_full(
        &self,
        commits_by_project: &BTreeMap<String, Vec<CommitRecord>>,
        supplements: &[String],
        date_range: Option<&str>,
    ) -> String {
        let commits: Vec<CommitRecord> = commits_by_project
            .iter()
            .flat_map(|(repo, records)| {
                records.iter().map(move |record| {
                    let mut record = record.clone();
                    if record.project.is_empty() {
                        record.project.clone_from(repo);
                    }
                    record
                })
            })
            .collect();

        let body = self.generate(&commits, supplements);

        match date_range {
            Some(range) if !body.is_empty() => {
                format!("# {} ({range}){SECTION_SEPARATOR}{body}", self.config.report.title)
            }
            _ => body,
        }
    }

    fn keep(&self, commit: &AnalyzedCommit) -> bool {
        let Some(exclusion) = self.filter.exclusion(commit) else {
            return true;
        };

        match exclusion {
            Exclusion::Message => debug!(
                hash = %commit.record.short_hash(),
                reason = trivial_reason(commit.message()).unwrap_or_default(),
                "dropping trivial commit"
            ),
            _ => debug!(
                hash = %commit.record.short_hash(),
                reason = %exclusion,
                "dropping trivial commit"
            ),
        }
        false
    }
}
