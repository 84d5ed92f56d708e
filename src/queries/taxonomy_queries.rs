use std::collections::BTreeSet;

use crate::model::{Dimension, FriendRecord, GroupFilter};
use crate::reference::ReferenceData;

/// Selectable groups for a dimension, always led by `GroupFilter::All`.
///
/// - `Custom`: every label found in any record's `groups`, deduplicated and
///   sorted lexicographically.
/// - `Demographic`: the configured gender enumeration, in its fixed order.
///
/// A label valid under one dimension is generally meaningless under the
/// other, so callers must reset their selection to `All` whenever they switch
/// dimension (see `ViewState::set_dimension`).
pub fn group_options(
    friends: &[FriendRecord],
    dimension: Dimension,
    reference: &ReferenceData,
) -> Vec<GroupFilter> {
    let labels: Vec<String> = match dimension {
        Dimension::Custom => friends
            .iter()
            .flat_map(|f| f.groups.iter())
            .filter(|g| !g.trim().is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        Dimension::Demographic => reference.genders().to_vec(),
    };

    std::iter::once(GroupFilter::All)
        .chain(labels.into_iter().map(GroupFilter::Label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_groups(groups: &[&str]) -> FriendRecord {
        let mut f = FriendRecord::create("x".into(), "男".into(), "INTJ".into());
        f.groups = groups.iter().map(|g| g.to_string()).collect();
        f
    }

    #[test]
    fn custom_labels_are_sorted_and_unique() {
        let friends = vec![with_groups(&["b", "a"]), with_groups(&["c", "a"]), with_groups(&[])];
        let options = group_options(&friends, Dimension::Custom, &ReferenceData::builtin());
        assert_eq!(
            options,
            vec![
                GroupFilter::All,
                GroupFilter::Label("a".into()),
                GroupFilter::Label("b".into()),
                GroupFilter::Label("c".into()),
            ]
        );
    }

    #[test]
    fn demographic_uses_configured_order() {
        let mut reference = ReferenceData::builtin();
        reference.genders = vec!["女".into(), "男".into(), "其他".into()];
        let options = group_options(&[with_groups(&["a"])], Dimension::Demographic, &reference);
        let labels: Vec<&str> = options.iter().map(GroupFilter::label).collect();
        assert_eq!(labels, vec!["全部", "女", "男", "其他"]);
    }

    #[test]
    fn empty_roster_still_offers_all() {
        let options = group_options(&[], Dimension::Custom, &ReferenceData::builtin());
        assert_eq!(options, vec![GroupFilter::All]);
    }
}
