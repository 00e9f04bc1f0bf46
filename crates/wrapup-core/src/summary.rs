//! Length-bounded summaries.

use crate::clean_commit_message;

/// Appended to hard-cut summaries.
pub const ELLIPSIS: &str = "...";

const CJK_BREAKS: [char; 7] = ['。', '，', '、', '；', '：', '！', '？'];
const ASCII_BREAKS: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Shortens `text` to at most `max_chars` characters at a natural break.
///
/// Break points must lie past the middle of the bound. They are tried in
/// order: a CJK punctuation mark (kept), an ASCII punctuation mark (kept),
/// a space (dropped). Without one, the text is hard cut and [`ELLIPSIS`] is
/// appended, so the result never exceeds `max_chars + 3` characters.
#[must_use]
pub fn truncate_at_break(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    let window = &chars[..max_chars];
    let half = max_chars / 2;
    let rfind = |mark: char| window.iter().rposition(|&c| c == mark).filter(|&i| i > half);

    let cut = CJK_BREAKS
        .iter()
        .chain(ASCII_BREAKS.iter())
        .find_map(|&mark| rfind(mark))
        .map(|i| i + 1)
        .or_else(|| rfind(' '));

    match cut {
        Some(end) => window[..end].iter().collect(),
        None => {
            let mut hard: String = window[..max_chars.saturating_sub(ELLIPSIS.len())]
                .iter()
                .collect();
            hard.push_str(ELLIPSIS);
            hard
        }
    }
}

/// Turns commit messages into one-line summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summarizer {
    render_labels: bool,
}

impl Summarizer {
    /// Creates a summarizer. Labels are prefixed only when `render_labels` is set.
    #[must_use]
    pub fn new(render_labels: bool) -> Self {
        Self { render_labels }
    }

    /// Summarizes a raw commit message within `max_chars` characters.
    ///
    /// The bound applies to the description; a rendered label comes on top.
    #[must_use]
    pub fn summarize(&self, message: &str, max_chars: usize, label: &str) -> String {
        let cleaned = clean_commit_message(message);
        let summary = truncate_at_break(&cleaned, max_chars).trim().to_string();

        if self.render_labels && !label.is_empty() {
            format!("{label} {summary}")
        } else {
            summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_at_break("用户登录", 20), "用户登录");
        assert_eq!(truncate_at_break("exactly ten", 11), "exactly ten");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let text = "一二三四五六七八九十";
        assert_eq!(truncate_at_break(text, 10), text);
    }

    #[test]
    fn test_cuts_after_cjk_punctuation() {
        let text = "完成用户登录模块开发，接入第三方认证服务并完成联调测试";
        assert_eq!(truncate_at_break(text, 18), "完成用户登录模块开发，");
    }

    #[test]
    fn test_cjk_marks_tried_in_order() {
        let text = "一二三四五六七八，九十。一二三四五六七八九十";
        assert_eq!(truncate_at_break(text, 14), "一二三四五六七八，九十。");

        // The comma wins over a later enumeration comma.
        let text = "一二三四五六七八，九十、一二三四五六七八九十";
        assert_eq!(truncate_at_break(text, 14), "一二三四五六七八，");
    }

    #[test]
    fn test_break_before_middle_is_rejected() {
        let text = "登录，一二三四五六七八九十一二三四五六七八九十";
        assert_eq!(truncate_at_break(text, 20), "登录，一二三四五六七八九十一二三四...");
    }

    #[test]
    fn test_cuts_after_ascii_punctuation() {
        let text = "implement login flow; add oauth provider";
        assert_eq!(truncate_at_break(text, 25), "implement login flow;");
    }

    #[test]
    fn test_cuts_before_space() {
        let text = "implement login flow with oauth provider";
        assert_eq!(truncate_at_break(text, 20), "implement login");
    }

    #[test]
    fn test_hard_cut() {
        let text = "一二三四五六七八九十一二三四五六七八九十一二三";
        let truncated = truncate_at_break(text, 20);

        assert_eq!(truncated, "一二三四五六七八九十一二三四五六七...");
        assert_eq!(truncated.chars().count(), 20);
    }

    #[test]
    fn test_never_exceeds_bound_plus_ellipsis() {
        let text = "a".repeat(100);
        for max in 0..40 {
            assert!(truncate_at_break(&text, max).chars().count() <= max + ELLIPSIS.len());
        }
    }

    #[test]
    fn test_summarize_cleans_prefix() {
        let summarizer = Summarizer::default();
        assert_eq!(
            summarizer.summarize("feat(auth): 用户登录系统开发", 30, "[新功能]"),
            "用户登录系统开发"
        );
    }

    #[test]
    fn test_summarize_with_labels() {
        let summarizer = Summarizer::new(true);
        assert_eq!(summarizer.summarize("fix: 修复登录问题", 20, "[修复]"), "[修复] 修复登录问题");
        assert_eq!(summarizer.summarize("更新部署脚本", 20, ""), "更新部署脚本");
    }

    #[test]
    fn test_summarize_truncates() {
        let summarizer = Summarizer::default();
        assert_eq!(
            summarizer.summarize("refactor: split cache layer into read and write paths", 20, ""),
            "split cache layer"
        );
    }
}
