//! Git abstraction layer for Wrapup.
//!
//! This crate provides Git operations:
//! - Repository management and identity lookup
//! - Date-range commit retrieval with diff statistics
//! - Collection across several repositories

mod author;
mod collect;
mod error;
mod repository;

pub use author::AuthorMatcher;
pub use collect::{RepoInfo, collect_from_repos, is_git_repo, merge_repo_commits, scan_repos};
pub use error::{GitError, GitResult};
pub use repository::{CommitQuery, Repository};
