//! Commit classification table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display and ranking attributes of a commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    /// Label such as `[新功能]`. Empty for unclassified commits.
    pub label: &'static str,

    /// Sort priority, 1 is the most important.
    pub priority: u8,

    /// Whether commits of this type are highlights by default.
    pub highlight: bool,

    /// Whether commits of this type are challenges by default.
    pub challenge: bool,
}

impl TypeProfile {
    const fn new(label: &'static str, priority: u8, highlight: bool, challenge: bool) -> Self {
        Self {
            label,
            priority,
            highlight,
            challenge,
        }
    }

    /// Profile of unclassified and unknown commit types.
    pub const OTHER: Self = Self::new("", 7, false, false);
}

/// The type of a commit, taken from its conventional prefix.
///
/// Unknown prefixes keep their lower-cased token in [`CommitType::Custom`] so
/// that they still group separately, while ranking like [`CommitType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommitType {
    Feature,
    Fix,
    Refactor,
    Performance,
    Style,
    Docs,
    Test,
    Build,
    Ci,
    Chore,
    Other,
    Custom(String),
}

impl CommitType {
    /// Resolves a type token. Matching is case-insensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        match tag.as_str() {
            "feat" => Self::Feature,
            "fix" => Self::Fix,
            "refactor" => Self::Refactor,
            "perf" => Self::Performance,
            "style" => Self::Style,
            "docs" => Self::Docs,
            "test" => Self::Test,
            "build" => Self::Build,
            "ci" => Self::Ci,
            "chore" => Self::Chore,
            "other" | "" => Self::Other,
            _ => Self::Custom(tag),
        }
    }

    /// Returns the type token.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Feature => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Performance => "perf",
            Self::Style => "style",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Other => "other",
            Self::Custom(tag) => tag,
        }
    }

    /// Returns the profile row for this type.
    #[must_use]
    pub fn profile(&self) -> TypeProfile {
        match self {
            Self::Feature => TypeProfile::new("[新功能]", 1, true, false),
            Self::Fix => TypeProfile::new("[修复]", 2, false, true),
            Self::Refactor => TypeProfile::new("[优化]", 3, false, false),
            Self::Performance => TypeProfile::new("[性能]", 3, true, false),
            Self::Test => TypeProfile::new("[测试]", 4, false, false),
            Self::Build => TypeProfile::new("[构建]", 4, false, false),
            Self::Docs => TypeProfile::new("[文档]", 5, false, false),
            Self::Ci => TypeProfile::new("[CI]", 5, false, false),
            Self::Style => TypeProfile::new("[样式]", 6, false, false),
            Self::Chore => TypeProfile::new("[杂项]", 6, false, false),
            Self::Other | Self::Custom(_) => TypeProfile::OTHER,
        }
    }

    /// Returns true if this is a feature commit.
    #[must_use]
    pub fn is_feature(&self) -> bool {
        matches!(self, Self::Feature)
    }

    /// Returns true if this is a bug fix commit.
    #[must_use]
    pub fn is_fix(&self) -> bool {
        matches!(self, Self::Fix)
    }

    /// Returns true if this is a performance commit.
    #[must_use]
    pub fn is_performance(&self) -> bool {
        matches!(self, Self::Performance)
    }

    /// All known types, in table order.
    #[must_use]
    pub fn known() -> [Self; 11] {
        [
            Self::Feature,
            Self::Fix,
            Self::Refactor,
            Self::Performance,
            Self::Style,
            Self::Docs,
            Self::Test,
            Self::Build,
            Self::Ci,
            Self::Chore,
            Self::Other,
        ]
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for CommitType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<CommitType> for String {
    fn from(commit_type: CommitType) -> Self {
        commit_type.tag().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for commit_type in CommitType::known() {
            assert_eq!(CommitType::from_tag(commit_type.tag()), commit_type);
        }
    }

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(CommitType::from_tag("FEAT"), CommitType::Feature);
        assert_eq!(CommitType::from_tag("Fix"), CommitType::Fix);
    }

    #[test]
    fn test_unknown_tag_is_custom() {
        let commit_type = CommitType::from_tag("Release");
        assert_eq!(commit_type, CommitType::Custom("release".to_string()));
        assert_eq!(commit_type.tag(), "release");
        assert_eq!(commit_type.profile(), TypeProfile::OTHER);
    }

    #[test]
    fn test_feature_profile() {
        let profile = CommitType::Feature.profile();
        assert_eq!(profile.label, "[新功能]");
        assert_eq!(profile.priority, 1);
        assert!(profile.highlight);
        assert!(!profile.challenge);
    }

    #[test]
    fn test_fix_profile() {
        let profile = CommitType::Fix.profile();
        assert_eq!(profile.priority, 2);
        assert!(!profile.highlight);
        assert!(profile.challenge);
    }

    #[test]
    fn test_other_has_lowest_priority() {
        let lowest = CommitType::known()
            .iter()
            .map(|t| t.profile().priority)
            .max()
            .unwrap();
        assert_eq!(lowest, 7);
        assert_eq!(CommitType::Other.profile().priority, lowest);
        assert!(CommitType::Other.profile().label.is_empty());
    }

    #[test]
    fn test_priorities_are_valid() {
        for commit_type in CommitType::known() {
            let priority = commit_type.profile().priority;
            assert!((1..=10).contains(&priority), "{commit_type} priority invalid");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CommitType::Performance.to_string(), "perf");
        assert_eq!(CommitType::Custom("wip".into()).to_string(), "wip");
    }

    #[test]
    fn test_serde_as_tag() {
        let json = serde_json::to_string(&CommitType::Feature).unwrap();
        assert_eq!(json, "\"feat\"");

        let parsed: CommitType = serde_json::from_str("\"hotfix\"").unwrap();
        assert_eq!(parsed, CommitType::Custom("hotfix".to_string()));
    }
}
