//! Git repository wrapper.

use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use git2::{DiffOptions, Repository as Git2Repo};
use tracing::{debug, warn};
use wrapup_commit::{CommitRecord, DiffStats, SMALL_CHANGE_THRESHOLD};

use crate::{AuthorMatcher, GitError, GitResult};

/// Selects the commits returned by [`Repository::commits`].
#[derive(Debug, Clone)]
pub struct CommitQuery {
    /// First day of the range, inclusive.
    pub since: NaiveDate,

    /// Last day of the range, inclusive.
    pub until: NaiveDate,

    /// Only keep commits by this author.
    pub author: Option<AuthorMatcher>,

    /// Changes below this many lines count as small.
    pub small_change_threshold: usize,
}

impl CommitQuery {
    /// Creates a query for the inclusive day range `[since, until]`.
    #[must_use]
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self {
            since,
            until,
            author: None,
            small_change_threshold: SMALL_CHANGE_THRESHOLD,
        }
    }

    /// Restricts the query to one author.
    #[must_use]
    pub fn with_author(mut self, author: AuthorMatcher) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the small-change threshold.
    #[must_use]
    pub fn with_small_change_threshold(mut self, threshold: usize) -> Self {
        self.small_change_threshold = threshold;
        self
    }

    /// Returns true if the day lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since <= date && date <= self.until
    }
}

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|source| GitError::NotARepo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { inner })
    }

    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::discover(path).map_err(|source| GitError::NotARepo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the repository name, used as the project name.
    #[must_use]
    pub fn name(&self) -> String {
        self.path()
            .file_name()
            .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned())
    }

    /// Returns the configured `user.name`, if any.
    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.config_value("user.name")
    }

    /// Returns the configured `user.email`, if any.
    #[must_use]
    pub fn user_email(&self) -> Option<String> {
        self.config_value("user.email")
    }

    fn config_value(&self, key: &str) -> Option<String> {
        let value = self.inner.config().ok()?.get_string(key).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Returns an author matcher built from the configured identity.
    #[must_use]
    pub fn identity(&self) -> Option<AuthorMatcher> {
        AuthorMatcher::from_identity(self.user_name().as_deref(), self.user_email().as_deref())
    }

    /// Returns the commits reachable from any reference that match the query,
    /// newest first.
    ///
    /// A commit whose diff cannot be computed is still returned, with
    /// [`DiffStats::unavailable`] and no file list.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be walked.
    pub fn commits(&self, query: &CommitQuery) -> GitResult<Vec<CommitRecord>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(git2::Sort::TIME)?;

        // Like `git log --all`: every reference that resolves to a commit.
        let mut has_tips = false;
        for reference in self.inner.references()? {
            let reference = reference?;
            if let Ok(commit) = reference.peel_to_commit() {
                revwalk.push(commit.id())?;
                has_tips = true;
            }
        }
        if let Ok(commit) = self.inner.head().and_then(|head| head.peel_to_commit()) {
            revwalk.push(commit.id())?;
            has_tips = true;
        }
        if !has_tips {
            debug!(path = ?self.path(), "repository has no commits");
            return Ok(Vec::new());
        }

        let project = self.name();
        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;
            let author = commit.author();

            let Some(date) = local_date(author.when()) else {
                continue;
            };
            if !query.contains(date) {
                continue;
            }

            let name = author.name().unwrap_or("Unknown");
            if let Some(matcher) = &query.author
                && !matcher.matches(name, author.email().unwrap_or(""))
            {
                continue;
            }

            let (diff, files) = match self.diff_summary(&commit, query.small_change_threshold) {
                Ok(summary) => summary,
                Err(err) => {
                    warn!(hash = %oid, error = %err, "diff lookup failed");
                    (DiffStats::unavailable(), Vec::new())
                }
            };

            let record = CommitRecord::new(
                oid.to_string(),
                commit.summary().unwrap_or(""),
                name,
                date,
                project.as_str(),
            )
            .with_diff(diff)
            .with_files(files);

            commits.push(record);
        }

        debug!(project = %project, count = commits.len(), "collected commits");
        Ok(commits)
    }

    /// Computes diff statistics and touched paths against the first parent,
    /// or against the empty tree for root commits.
    fn diff_summary(
        &self,
        commit: &git2::Commit<'_>,
        threshold: usize,
    ) -> GitResult<(DiffStats, Vec<String>)> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        opts.ignore_whitespace(false);

        let diff =
            self.inner
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        let stats = diff.stats()?;

        let files = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect();

        let stats = DiffStats::with_threshold(
            stats.files_changed(),
            stats.insertions(),
            stats.deletions(),
            threshold,
        );

        Ok((stats, files))
    }
}

/// Calendar day of a git timestamp in its own UTC offset.
fn local_date(time: git2::Time) -> Option<NaiveDate> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)?;
    let utc: DateTime<Utc> = DateTime::from_timestamp(time.seconds(), 0)?;
    Some(utc.with_timezone(&offset).date_naive())
}
