//! Keyword extraction and grouping signatures.

use std::sync::LazyLock;

use regex::Regex;

use crate::clean_commit_message;

/// At most this many keywords are kept per message.
pub const MAX_KEYWORDS: usize = 3;

static CJK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]+").expect("invalid regex"));

static ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("invalid regex"));

const STOP_WORDS: &[&str] = &["the", "and", "for", "with", "this", "that", "from", "into"];

/// Extracts up to [`MAX_KEYWORDS`] keywords from a commit message.
///
/// Runs of CJK ideographs come first, then lower-cased ASCII words of three
/// letters or more, each in order of appearance. Stop words are dropped.
pub fn extract_keywords(message: &str) -> Vec<String> {
    let cleaned = clean_commit_message(message);

    let ideographs = CJK_RE.find_iter(&cleaned).map(|m| m.as_str().to_string());
    let words = ALPHA_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_lowercase());

    ideographs
        .chain(words)
        .filter(|keyword| !STOP_WORDS.contains(&keyword.as_str()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Signature under which commits of one type are merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Sorted keywords of the message.
    Keywords(Vec<String>),

    /// The raw message, used when no keyword could be extracted.
    Message(String),
}

impl GroupKey {
    /// Computes the signature of a raw commit message.
    #[must_use]
    pub fn for_message(message: &str) -> Self {
        let mut keywords = extract_keywords(message);
        if keywords.is_empty() {
            return Self::Message(message.to_string());
        }
        keywords.sort();
        Self::Keywords(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_chinese() {
        assert_eq!(extract_keywords("feat(auth): 用户登录系统开发"), vec!["用户登录系统开发"]);
    }

    #[test]
    fn test_extract_chinese_runs_in_order() {
        assert_eq!(
            extract_keywords("fix: 修复登录，优化注册。调整首页"),
            vec!["修复登录", "优化注册", "调整首页"]
        );
    }

    #[test]
    fn test_extract_english_lowercased() {
        assert_eq!(
            extract_keywords("feat: Add OAuth login"),
            vec!["add", "oauth", "login"]
        );
    }

    #[test]
    fn test_chinese_before_english() {
        assert_eq!(
            extract_keywords("feat: support OAuth 登录"),
            vec!["登录", "support", "oauth"]
        );
    }

    #[test]
    fn test_drops_stop_words_and_short_words() {
        assert_eq!(
            extract_keywords("refactor: move the cache into db layer"),
            vec!["move", "cache", "layer"]
        );
    }

    #[test]
    fn test_limit() {
        assert_eq!(extract_keywords("docs: alpha beta gamma delta").len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_no_keywords() {
        assert!(extract_keywords("fix: #42 v2").is_empty());
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_group_key_is_sorted() {
        assert_eq!(
            GroupKey::for_message("feat: login oauth"),
            GroupKey::for_message("feat(auth): oauth login")
        );
        assert_eq!(
            GroupKey::for_message("feat: login oauth"),
            GroupKey::Keywords(vec!["login".into(), "oauth".into()])
        );
    }

    #[test]
    fn test_group_key_falls_back_to_message() {
        assert_eq!(
            GroupKey::for_message("fix: #42"),
            GroupKey::Message("fix: #42".into())
        );
        assert_ne!(GroupKey::for_message("fix: #42"), GroupKey::for_message("fix: #43"));
    }
}
