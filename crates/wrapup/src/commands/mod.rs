//! Subcommands and the options they share.

pub mod collect;
pub mod init;
pub mod report;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Days, Local, NaiveDate};
use clap::Args;
use tracing::{info, warn};
use wrapup_commit::CommitRecord;
use wrapup_config::Config;
use wrapup_git::{
    AuthorMatcher, CommitQuery, Repository, collect_from_repos, is_git_repo, scan_repos,
};

/// Days covered by the default range, today included.
const DEFAULT_RANGE_DAYS: u64 = 7;

/// Where and what to collect.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Repository to read (repeatable)
    #[arg(short, long = "repo", value_name = "PATH", default_value = ".")]
    pub repos: Vec<PathBuf>,

    /// First day to include (default: six days before --until)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub since: Option<NaiveDate>,

    /// Last day to include (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub until: Option<NaiveDate>,

    /// Author regex matched against "Name <email>" (default: each repository's user)
    #[arg(short, long)]
    pub author: Option<String>,
}

impl SourceArgs {
    /// Resolves the inclusive date range.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        let until = self.until.unwrap_or_else(|| Local::now().date_naive());
        let since = match self.since {
            Some(since) => since,
            None => until
                .checked_sub_days(Days::new(DEFAULT_RANGE_DAYS - 1))
                .context("date range out of bounds")?,
        };

        if since > until {
            bail!("--since ({since}) is after --until ({until})");
        }
        Ok((since, until))
    }

    /// Collects matching commits from every repository, keyed by repository name.
    pub fn collect(&self, config: &Config) -> Result<BTreeMap<String, Vec<CommitRecord>>> {
        let (since, until) = self.date_range()?;
        let mut query = CommitQuery::new(since, until)
            .with_small_change_threshold(config.filter.small_change_threshold);
        if let Some(pattern) = &self.author {
            query = query.with_author(AuthorMatcher::from_pattern(pattern)?);
        }

        let paths: Vec<PathBuf> = self.repos.iter().map(|path| repo_root(path)).collect();
        let repos = scan_repos(&paths);
        if repos.is_empty() {
            warn!(?paths, "no git repositories found");
        }

        let repo_paths: Vec<PathBuf> = repos.into_iter().map(|repo| repo.path).collect();
        let by_repo = collect_from_repos(&repo_paths, &query);
        info!(
            %since,
            %until,
            repos = by_repo.len(),
            commits = by_repo.values().map(Vec::len).sum::<usize>(),
            "collected commits"
        );
        Ok(by_repo)
    }
}

// Lets a path inside a work tree stand for the whole repository.
fn repo_root(path: &Path) -> PathBuf {
    if is_git_repo(path) {
        return path.to_path_buf();
    }
    Repository::discover(path)
        .map_or_else(|_| path.to_path_buf(), |repo| repo.path().to_path_buf())
}
