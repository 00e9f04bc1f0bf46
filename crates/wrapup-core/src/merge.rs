//! Folding related commits into report entries.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;
use wrapup_commit::{AnalyzedCommit, MergedEntry};

use crate::{GroupKey, clean_commit_message, is_trivial_detail};

/// Merges one project's commits into report entries.
///
/// Commits are grouped by type, then by keyword signature. Each group becomes
/// one entry led by its first feature commit (or its first commit), carrying
/// the distinct non-trivial descriptions of the group as details when there
/// are at least two of them. Entries are ordered by priority, then by message.
#[must_use]
pub fn merge_related_commits(commits: &[&AnalyzedCommit]) -> Vec<MergedEntry> {
    match commits {
        [] => return Vec::new(),
        [single] => return vec![MergedEntry::single(single)],
        _ => {}
    }

    let by_type = group_by(commits.iter().copied(), |commit| commit.commit_type().clone());

    let mut merged: Vec<MergedEntry> = by_type
        .into_iter()
        .flat_map(|(_, typed)| group_by(typed, |commit| GroupKey::for_message(commit.message())))
        .map(|(key, group)| {
            let entry = merge_group(&group);
            debug!(
                ?key,
                count = entry.occurrence_count,
                details = entry.details.len(),
                "merged commit group"
            );
            entry
        })
        .collect();

    merged.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.message.cmp(&b.message))
    });
    merged
}

fn merge_group(group: &[&AnalyzedCommit]) -> MergedEntry {
    let lead = group
        .iter()
        .find(|commit| commit.commit_type().is_feature())
        .unwrap_or(&group[0]);

    let mut entry = MergedEntry::single(lead);
    entry.details = collect_details(group);
    entry.occurrence_count = group.len();
    entry
}

fn collect_details(group: &[&AnalyzedCommit]) -> Vec<String> {
    let mut seen = HashSet::new();
    let details: Vec<String> = group
        .iter()
        .map(|commit| clean_commit_message(commit.message()))
        .filter(|detail| !detail.is_empty() && !is_trivial_detail(detail))
        .filter(|detail| seen.insert(detail.clone()))
        .collect();

    if details.len() > 1 { details } else { Vec::new() }
}

/// Groups items by key, keeping first-seen order for groups and members.
fn group_by<'a, K, I, F>(items: I, key_of: F) -> Vec<(K, Vec<&'a AnalyzedCommit>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = &'a AnalyzedCommit>,
    F: Fn(&AnalyzedCommit) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a AnalyzedCommit>)> = Vec::new();

    for item in items {
        let key = key_of(item);
        match index.get(&key) {
            Some(&position) => groups[position].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}
