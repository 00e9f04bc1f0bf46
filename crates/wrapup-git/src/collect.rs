//! Commit collection across several repositories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use wrapup_commit::CommitRecord;

use crate::{CommitQuery, Repository};

/// A repository found by [`scan_repos`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Path of the work tree.
    pub path: PathBuf,

    /// Repository name.
    pub name: String,
}

/// Returns true if the path contains a `.git` directory.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Keeps the paths that are git repositories.
#[must_use]
pub fn scan_repos(paths: &[PathBuf]) -> Vec<RepoInfo> {
    paths
        .iter()
        .filter(|path| is_git_repo(path))
        .map(|path| RepoInfo {
            path: path.clone(),
            name: path
                .file_name()
                .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned()),
        })
        .collect()
}

/// Collects matching commits from every repository, keyed by repository name.
///
/// Paths that are not repositories, and repositories whose history cannot be
/// read, are skipped. When the query has no author, each repository's own
/// `user.name` / `user.email` select the commits. Repositories without
/// matching commits are omitted.
#[must_use]
pub fn collect_from_repos(
    paths: &[PathBuf],
    query: &CommitQuery,
) -> BTreeMap<String, Vec<CommitRecord>> {
    let mut by_repo: BTreeMap<String, Vec<CommitRecord>> = BTreeMap::new();

    for path in paths {
        if !is_git_repo(path) {
            debug!(?path, "skipping non-repository");
            continue;
        }

        let repo = match Repository::open(path) {
            Ok(repo) => repo,
            Err(err) => {
                warn!(?path, error = %err, "cannot open repository");
                continue;
            }
        };

        let mut repo_query = query.clone();
        if repo_query.author.is_none() {
            repo_query.author = repo.identity();
        }

        let commits = match repo.commits(&repo_query) {
            Ok(commits) => commits,
            Err(err) => {
                warn!(?path, error = %err, "cannot read commits");
                continue;
            }
        };

        if commits.is_empty() {
            continue;
        }

        let name = repo.name();
        info!(repo = %name, count = commits.len(), "collected commits");
        by_repo.entry(name).or_default().extend(commits);
    }

    by_repo
}

/// Flattens per-repository commits into one list, newest first.
///
/// Records without a project take the repository name.
#[must_use]
pub fn merge_repo_commits(by_repo: BTreeMap<String, Vec<CommitRecord>>) -> Vec<CommitRecord> {
    let mut merged: Vec<CommitRecord> = by_repo
        .into_iter()
        .flat_map(|(repo_name, commits)| {
            commits.into_iter().map(move |mut commit| {
                if commit.project.is_empty() {
                    commit.project.clone_from(&repo_name);
                }
                commit
            })
        })
        .collect();

    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use git2::{Repository as Git2Repository, Signature, Time};
    use std::fs;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn init_repo(dir: &Path, user: &str) -> Git2Repository {
        let repo = Git2Repository::init(dir).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", user).unwrap();
        config.set_str("user.email", "me@example.com").unwrap();
        repo
    }

    fn commit(repo: &Git2Repository, message: &str, author: &str, email: &str, d: u32) {
        let workdir = repo.workdir().unwrap().to_path_buf();
        let file = format!("file-{d}-{}.txt", author.len());
        fs::write(workdir.join(&file), "content\n").unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(&file)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let seconds = day(d).and_hms_opt(12, 0, 0).unwrap().and_utc().timestamp();
        let sig = Signature::new(author, email, &Time::new(seconds, 0)).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    fn record(hash: &str, project: &str, d: u32) -> CommitRecord {
        CommitRecord::new(hash, "feat: x", "me", day(d), project)
    }

    #[test]
    fn test_is_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_git_repo(temp_dir.path()));

        init_repo(temp_dir.path(), "Me");
        assert!(is_git_repo(temp_dir.path()));
    }

    #[test]
    fn test_scan_repos() {
        let root = TempDir::new().unwrap();
        let repo_dir = root.path().join("project-a");
        let plain_dir = root.path().join("notes");
        fs::create_dir_all(&repo_dir).unwrap();
        fs::create_dir_all(&plain_dir).unwrap();
        init_repo(&repo_dir, "Me");

        let repos = scan_repos(&[repo_dir.clone(), plain_dir]);
        assert_eq!(
            repos,
            vec![RepoInfo {
                path: repo_dir,
                name: "project-a".to_string(),
            }]
        );
    }

    #[test]
    fn test_collect_uses_repo_identity() {
        let root = TempDir::new().unwrap();
        let repo_dir = root.path().join("project-a");
        fs::create_dir_all(&repo_dir).unwrap();
        let repo = init_repo(&repo_dir, "Me");
        commit(&repo, "feat: mine", "Me", "me@example.com", 5);
        commit(&repo, "feat: colleague", "Colleague", "col@example.com", 6);

        let query = CommitQuery::new(day(1), day(31));
        let by_repo = collect_from_repos(&[repo_dir], &query);

        let commits = &by_repo["project-a"];
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "feat: mine");
        assert_eq!(commits[0].project, "project-a");
    }

    #[test]
    fn test_collect_explicit_author() {
        let root = TempDir::new().unwrap();
        let repo_dir = root.path().join("project-a");
        fs::create_dir_all(&repo_dir).unwrap();
        let repo = init_repo(&repo_dir, "Me");
        commit(&repo, "feat: mine", "Me", "me@example.com", 5);
        commit(&repo, "feat: colleague", "Colleague", "col@example.com", 6);

        let query = CommitQuery::new(day(1), day(31))
            .with_author(crate::AuthorMatcher::from_pattern("Colleague").unwrap());
        let by_repo = collect_from_repos(&[repo_dir], &query);

        assert_eq!(by_repo["project-a"][0].message, "feat: colleague");
    }

    #[test]
    fn test_collect_skips_non_repos_and_empty_results() {
        let root = TempDir::new().unwrap();
        let plain_dir = root.path().join("plain");
        let empty_repo = root.path().join("empty");
        fs::create_dir_all(&plain_dir).unwrap();
        fs::create_dir_all(&empty_repo).unwrap();
        init_repo(&empty_repo, "Me");

        let query = CommitQuery::new(day(1), day(31));
        let by_repo = collect_from_repos(
            &[plain_dir, empty_repo, root.path().join("missing")],
            &query,
        );
        assert!(by_repo.is_empty());
    }

    #[test]
    fn test_merge_repo_commits_sorts_newest_first() {
        let mut by_repo = BTreeMap::new();
        by_repo.insert(
            "project-a".to_string(),
            vec![record("a1", "project-a", 3), record("a2", "", 9)],
        );
        by_repo.insert("project-b".to_string(), vec![record("b1", "project-b", 5)]);

        let merged = merge_repo_commits(by_repo);
        let hashes: Vec<_> = merged.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["a2", "b1", "a1"]);
        assert_eq!(merged[0].project, "project-a");
    }

    #[test]
    fn test_merge_repo_commits_empty() {
        assert!(merge_repo_commits(BTreeMap::new()).is_empty());
    }
}
