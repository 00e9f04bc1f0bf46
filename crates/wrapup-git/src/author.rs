//! Author matching for commit retrieval.

use regex::Regex;

use crate::{GitError, GitResult};

/// Selects commits by author, the way `git log --author` does.
///
/// The pattern is matched against `Name <email>`.
#[derive(Debug, Clone)]
pub struct AuthorMatcher {
    pattern: Regex,
}

impl AuthorMatcher {
    /// Builds a matcher from a user-supplied regular expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn from_pattern(pattern: &str) -> GitResult<Self> {
        let compiled = Regex::new(pattern).map_err(|source| GitError::InvalidAuthorPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern: compiled })
    }

    /// Builds a matcher accepting either the given name or the given e-mail.
    ///
    /// Both values are matched literally. Returns `None` when neither is set,
    /// meaning no author filtering.
    #[must_use]
    pub fn from_identity(name: Option<&str>, email: Option<&str>) -> Option<Self> {
        let parts: Vec<String> = [name, email]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(regex::escape)
            .collect();

        let pattern = match parts.as_slice() {
            [] => return None,
            [single] => single.clone(),
            _ => format!("({})", parts.join("|")),
        };

        Regex::new(&pattern).ok().map(|pattern| Self { pattern })
    }

    /// Returns true if the author matches.
    #[must_use]
    pub fn matches(&self, name: &str, email: &str) -> bool {
        self.pattern.is_match(&format!("{name} <{email}>"))
    }

    /// Returns the underlying pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
