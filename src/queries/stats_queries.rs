use std::collections::HashMap;

use serde::Serialize;

use crate::model::{DistributionMode, FriendRecord};
use crate::reference::ReferenceData;

/// One slice of a distribution chart. Only non-empty buckets are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

impl DistributionEntry {
    /// Share of `total` in percent; 0 for an empty total.
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 * 100.0 / total as f64
        }
    }
}

/// Counts items per key. Entries come out by count descending, ties in the
/// order their key was first seen.
pub(crate) fn count_by<T, I, F>(items: I, mut key: F) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<DistributionEntry> = Vec::new();

    for item in items {
        let label = key(&item);
        match index.get(&label) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(label.clone(), entries.len());
                entries.push(DistributionEntry { label, count: 1 });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Personality distribution of a record subset, by temperament or by type.
/// Counts always sum to the number of records.
pub fn distribution<'a, I>(
    friends: I,
    mode: DistributionMode,
    reference: &ReferenceData,
) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    match mode {
        DistributionMode::Coarse => count_by(friends, |f| {
            reference.coarse_group(&f.personality_type).to_string()
        }),
        DistributionMode::Fine => count_by(friends, |f| f.personality_type.clone()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub pinned: usize,
    pub with_birth_date: usize,
    pub distribution: Vec<DistributionEntry>,
}

pub fn roster_stats<'a>(
    friends: &[&'a FriendRecord],
    mode: DistributionMode,
    reference: &ReferenceData,
) -> RosterStats {
    RosterStats {
        total: friends.len(),
        pinned: friends.iter().filter(|f| f.is_pinned).count(),
        with_birth_date: friends.iter().filter(|f| f.birth_date.is_some()).count(),
        distribution: distribution(friends.iter().copied(), mode, reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(types: &[&str]) -> Vec<FriendRecord> {
        types
            .iter()
            .map(|t| FriendRecord::create("x".into(), "男".into(), t.to_string()))
            .collect()
    }

    #[test]
    fn coarse_counts_sorted_desc() {
        let friends = roster(&["INTJ", "ENFP", "INFP", "ISTJ", "INFJ"]);
        let dist = distribution(&friends, DistributionMode::Coarse, &ReferenceData::builtin());
        assert_eq!(
            dist,
            vec![
                DistributionEntry { label: "外交家".into(), count: 3 },
                DistributionEntry { label: "分析家".into(), count: 1 },
                DistributionEntry { label: "守护者".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn unknown_type_goes_to_default_bucket() {
        let friends = roster(&["????", "ISFJ"]);
        let dist = distribution(&friends, DistributionMode::Coarse, &ReferenceData::builtin());
        assert_eq!(dist, vec![DistributionEntry { label: "守护者".into(), count: 2 }]);
    }

    #[test]
    fn fine_counts_never_emit_zero() {
        let friends = roster(&["ENFP", "INTJ", "ENFP"]);
        let dist = distribution(&friends, DistributionMode::Fine, &ReferenceData::builtin());
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0], DistributionEntry { label: "ENFP".into(), count: 2 });
        assert!(dist.iter().all(|e| e.count > 0));
        assert_eq!(dist.iter().map(|e| e.count).sum::<usize>(), friends.len());
    }

    #[test]
    fn empty_input_gives_empty_distribution() {
        let dist = distribution(&[], DistributionMode::Fine, &ReferenceData::builtin());
        assert!(dist.is_empty());
    }

    #[test]
    fn percentage() {
        let entry = DistributionEntry { label: "a".into(), count: 1 };
        assert_eq!(entry.percentage(4), 25.0);
        assert_eq!(entry.percentage(0), 0.0);
    }
}
