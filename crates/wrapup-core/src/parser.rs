//! Commit message parsing and trivial-message detection.

use std::sync::LazyLock;

use regex::Regex;
use wrapup_commit::{AnalyzedCommit, CommitRecord, CommitType, ParsedCommit};

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w+)(?:\((?P<scope>[^)]+)\))?\s*:\s*(?P<description>.+)$")
        .expect("invalid regex")
});

static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(?:\([^)]+\))?\s*:\s*").expect("invalid regex"));

/// Where a trivial-message pattern may match.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Start,
    Anywhere,
}

/// Trivial-message rules as `(reason, anchor, pattern)`, checked in order
/// against the trimmed, lower-cased message.
const TRIVIAL_RULES: &[(&str, Anchor, &str)] = &[
    ("typo", Anchor::Start, r"fix\s*typo"),
    ("typo", Anchor::Start, r"typo"),
    ("readme-update", Anchor::Start, r"update\s*(readme|changelog)"),
    ("merge", Anchor::Start, r"merge\s+branch"),
    ("merge", Anchor::Start, r"merge\s+pull\s+request"),
    ("wip", Anchor::Start, r"wip$"),
    ("wip", Anchor::Start, r"wip:"),
    ("formatting", Anchor::Start, r"format"),
    ("formatting", Anchor::Start, r"lint"),
    ("formatting", Anchor::Start, r"style:"),
    ("doc-touch-up", Anchor::Start, r"完善.*文档$"),
    ("doc-touch-up", Anchor::Start, r"更新.*文档$"),
    ("doc-touch-up", Anchor::Start, r"docs:.*typo"),
    ("doc-touch-up", Anchor::Start, r"docs:.*fix\s*typo"),
    ("cleanup", Anchor::Start, r"代码清理$"),
    ("cleanup", Anchor::Start, r"清理.*代码$"),
    ("cleanup", Anchor::Start, r"chore:.*clean"),
    ("cleanup", Anchor::Start, r"chore:.*cleanup"),
    ("debug-removal", Anchor::Anywhere, r"移除.*调试"),
    ("debug-removal", Anchor::Anywhere, r"删除.*调试"),
    ("debug-removal", Anchor::Start, r"移除.*日志$"),
    ("debug-removal", Anchor::Start, r"删除.*日志$"),
    ("debug-removal", Anchor::Start, r"chore:.*log$"),
    ("debug-removal", Anchor::Start, r"chore:.*debug"),
    ("style-tweak", Anchor::Start, r"样式调整$"),
    ("style-tweak", Anchor::Start, r"调整.*样式$"),
    ("style-tweak", Anchor::Start, r"style:.*调整"),
];

static TRIVIAL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TRIVIAL_RULES
        .iter()
        .map(|&(reason, anchor, pattern)| {
            let source = match anchor {
                Anchor::Start => format!("(?i)^(?:{pattern})"),
                Anchor::Anywhere => format!("(?i){pattern}"),
            };
            (reason, Regex::new(&source).expect("invalid trivial pattern"))
        })
        .collect()
});

/// Returns the reason a message is trivial, or `None` if no rule matches.
pub fn trivial_reason(message: &str) -> Option<&'static str> {
    let normalized = message.trim().to_lowercase();
    TRIVIAL_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&normalized))
        .map(|&(reason, _)| reason)
}

/// Parses a commit message into its classification.
///
/// Messages in the `type(scope): description` shape take their type from the
/// prefix; anything else is classified as [`CommitType::Other`] with the whole
/// message as description. Never fails.
pub fn parse_commit_message(message: &str) -> ParsedCommit {
    let trivial = trivial_reason(message).is_some();

    let parsed = match CONVENTIONAL_RE.captures(message) {
        Some(captures) => ParsedCommit::new(
            CommitType::from_tag(&captures["type"]),
            captures.name("scope").map(|m| m.as_str().to_string()),
            &captures["description"],
        ),
        None => ParsedCommit::new(CommitType::Other, None, message),
    };

    parsed.trivial(trivial)
}

/// Classifies a record's message and pairs the two.
pub fn analyze_commit(record: CommitRecord) -> AnalyzedCommit {
    let parsed = parse_commit_message(&record.message);
    AnalyzedCommit::new(record, parsed)
}

/// Strips leading `type(scope): ` prefixes and surrounding whitespace.
///
/// Cleaning an already cleaned message returns it unchanged.
pub fn clean_commit_message(message: &str) -> String {
    let mut rest = message.trim();
    while let Some(prefix) = PREFIX_RE.find(rest) {
        rest = &rest[prefix.end()..];
    }
    rest.trim().to_string()
}
