//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading repositories.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a git work tree.
    #[error("not a git repository: {}", path.display())]
    NotARepo {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// An `--author` pattern that does not compile.
    #[error("invalid author pattern `{pattern}`")]
    InvalidAuthorPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
