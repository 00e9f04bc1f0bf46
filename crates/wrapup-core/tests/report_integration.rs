//! End-to-end tests of the report pipeline.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use wrapup_commit::{CommitRecord, DiffStats};
use wrapup_config::Config;
use wrapup_core::{
    ReportGenerator, analyze_commit, analyze_work_significance, merge_related_commits,
    truncate_at_break,
};

fn commit(message: &str, project: &str) -> CommitRecord {
    commit_with_diff(message, project, DiffStats::new(2, 30, 10))
}

fn commit_with_diff(message: &str, project: &str, diff: DiffStats) -> CommitRecord {
    CommitRecord::new(
        "0123456789abcdef",
        message,
        "dev",
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        project,
    )
    .with_diff(diff)
}

#[test]
fn test_empty_input_yields_empty_document() {
    let config = Config::default();
    assert_eq!(ReportGenerator::new(&config).generate(&[], &[]), "");
}

#[test]
fn test_supplements_only() {
    let config = Config::default();
    let supplements = vec!["A".to_string(), "B".to_string()];

    let report = ReportGenerator::new(&config).generate(&[], &supplements);
    assert_eq!(report, "其他\n  - A\n  - B");
}

#[test]
fn test_related_features_merge_into_highlight() {
    let analyzed: Vec<_> = [
        commit("feat(auth): 用户登录系统开发", "portal"),
        commit("feat: 用户登录系统开发！", "portal"),
    ]
    .into_iter()
    .map(analyze_commit)
    .collect();
    let refs: Vec<_> = analyzed.iter().collect();

    let merged = merge_related_commits(&refs);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].occurrence_count, 2);
    assert!(analyze_work_significance(&merged[0]).highlight);
}

#[test]
fn test_repeated_fixes_are_challenge() {
    let analyzed: Vec<_> = [
        commit("fix: 支付回调超时", "shop"),
        commit("fix(pay): 支付回调超时", "shop"),
    ]
    .into_iter()
    .map(analyze_commit)
    .collect();
    let refs: Vec<_> = analyzed.iter().collect();

    let merged = merge_related_commits(&refs);
    assert_eq!(merged.len(), 1);
    assert!(analyze_work_significance(&merged[0]).challenge);
}

#[test]
fn test_small_change_dropped_regardless_of_message() {
    let config = Config::default();
    let commits = vec![commit_with_diff(
        "feat: 核心支付流程重构",
        "shop",
        DiffStats::new(1, 5, 4),
    )];

    assert_eq!(ReportGenerator::new(&config).generate(&commits, &[]), "");
}

#[test]
fn test_unavailable_diff_is_kept() {
    let config = Config::default();
    let commits = vec![commit_with_diff(
        "feat: 核心支付流程重构",
        "shop",
        DiffStats::unavailable(),
    )];

    assert_eq!(
        ReportGenerator::new(&config).generate(&commits, &[]),
        "shop\n  - 核心支付流程重构"
    );
}

#[test]
fn test_truncation_bound() {
    let text = "这是一段非常长的提交说明没有任何标点符号所以只能被硬截断处理";
    for max in [5, 10, 20, 25, 30] {
        let truncated = truncate_at_break(text, max);
        assert!(truncated.chars().count() <= max + 3);
    }
    assert_eq!(truncate_at_break("短句", 20), "短句");
}

#[test]
fn test_full_weekly_report() {
    let config = Config::default();
    let mut by_repo = BTreeMap::new();
    by_repo.insert(
        "portal".to_string(),
        vec![
            commit("feat(auth): 用户登录系统开发", "portal"),
            commit("feat: 用户登录系统开发！", "portal"),
            commit("fix: 修复首页在移动端浏览器中白屏的问题，并补充端到端回归用例", "portal"),
            commit("docs: 接口说明", "portal"),
            commit("Merge branch 'develop'", "portal"),
            commit_with_diff("chore: 依赖升级", "portal", DiffStats::new(1, 800, 700))
                .with_files(["package-lock.json"]),
        ],
    );
    by_repo.insert(
        "billing".to_string(),
        vec![
            commit("perf: 账单查询接口增加缓存，响应时间从两秒降低到两百毫秒以内", ""),
            commit("清理无用代码", ""),
        ],
    );

    let report = ReportGenerator::new(&config).generate_full(
        &by_repo,
        &["参加架构评审".to_string()],
        Some("2026-01-12 ~ 2026-01-18"),
    );

    insta::assert_snapshot!(report, @r"
    # 周报 (2026-01-12 ~ 2026-01-18)

    billing
      - 账单查询接口增加缓存，响应时间从两秒降低到两百毫秒以内

    portal
      - 用户登录系统开发
        - 用户登录系统开发
        - 用户登录系统开发！
      - 修复首页在移动端浏览器中白屏的问题，
      - 接口说明

    其他
      - 参加架构评审
    ");
}
