use tracing::debug;

use crate::model::{Dimension, FriendRecord, GroupFilter};

/// Active predicates of the list view. All of them must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub dimension: Dimension,
    pub group: GroupFilter,
    /// Free text; ignored when blank.
    pub query: String,
}

pub fn matches_group(friend: &FriendRecord, dimension: Dimension, group: &GroupFilter) -> bool {
    match group {
        GroupFilter::All => true,
        GroupFilter::Label(label) => match dimension {
            Dimension::Custom => friend.in_group(label),
            Dimension::Demographic => &friend.gender == label,
        },
    }
}

/// Case-insensitive substring match against name, type, nationality,
/// province and education. `needle` must already be lowercased.
pub fn matches_query(friend: &FriendRecord, needle: &str) -> bool {
    let fields = [
        Some(friend.name.as_str()),
        Some(friend.personality_type.as_str()),
        friend.nationality.as_deref(),
        friend.province.as_deref(),
        friend.education.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Records passing every active predicate, in input order.
pub fn filter_friends<'a, I>(friends: I, criteria: &FilterCriteria) -> Vec<&'a FriendRecord>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    let needle = if criteria.query.trim().is_empty() {
        None
    } else {
        Some(criteria.query.to_lowercase())
    };

    let result: Vec<&FriendRecord> = friends
        .into_iter()
        .filter(|f| matches_group(f, criteria.dimension, &criteria.group))
        .filter(|f| needle.as_deref().map_or(true, |n| matches_query(f, n)))
        .collect();

    debug!(
        group = %criteria.group,
        query = %criteria.query,
        matched = result.len(),
        "filtered roster"
    );
    result
}
