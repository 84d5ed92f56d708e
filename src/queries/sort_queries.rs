use std::cmp::Ordering;

use crate::model::{FriendRecord, SortKey};

/// Pinned records first; then the key, newest or youngest/oldest first.
/// Missing ages and timestamps count as 0.
pub fn compare(a: &FriendRecord, b: &FriendRecord, key: SortKey) -> Ordering {
    b.is_pinned.cmp(&a.is_pinned).then_with(|| match key {
        SortKey::MostRecent => b.created_at_or_zero().cmp(&a.created_at_or_zero()),
        SortKey::AgeAscending => a.age_or_zero().cmp(&b.age_or_zero()),
        SortKey::AgeDescending => b.age_or_zero().cmp(&a.age_or_zero()),
    })
}

/// Returns a new, stably ordered sequence; ties keep their input order.
pub fn sort_friends<'a, I>(friends: I, key: SortKey) -> Vec<&'a FriendRecord>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    let mut sorted: Vec<&FriendRecord> = friends.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, age: Option<u32>, created_at: Option<i64>, pinned: bool) -> FriendRecord {
        let mut f = FriendRecord::create(name.into(), "男".into(), "INTJ".into());
        f.age = age;
        f.created_at = created_at;
        f.is_pinned = pinned;
        f
    }

    fn names(sorted: &[&FriendRecord]) -> Vec<String> {
        sorted.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn most_recent_first() {
        let friends = vec![
            friend("old", None, Some(1), false),
            friend("new", None, Some(3), false),
            friend("mid", None, Some(2), false),
        ];
        assert_eq!(names(&sort_friends(&friends, SortKey::MostRecent)), ["new", "mid", "old"]);
    }

    #[test]
    fn missing_timestamp_is_oldest() {
        let friends = vec![friend("none", None, None, false), friend("some", None, Some(5), false)];
        assert_eq!(names(&sort_friends(&friends, SortKey::MostRecent)), ["some", "none"]);
    }

    #[test]
    fn age_orders() {
        let friends = vec![
            friend("b", Some(30), None, false),
            friend("none", None, None, false),
            friend("a", Some(20), None, false),
        ];
        assert_eq!(names(&sort_friends(&friends, SortKey::AgeAscending)), ["none", "a", "b"]);
        assert_eq!(names(&sort_friends(&friends, SortKey::AgeDescending)), ["b", "a", "none"]);
    }

    #[test]
    fn pinned_always_first() {
        let friends = vec![
            friend("young", Some(18), Some(9), false),
            friend("pinned-old", Some(80), Some(1), true),
        ];
        for key in [SortKey::MostRecent, SortKey::AgeAscending, SortKey::AgeDescending] {
            assert_eq!(sort_friends(&friends, key)[0].name, "pinned-old");
        }
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let friends = vec![
            friend("first", Some(25), Some(7), false),
            friend("second", Some(25), Some(7), false),
            friend("third", Some(25), Some(7), false),
        ];
        for key in [SortKey::MostRecent, SortKey::AgeAscending, SortKey::AgeDescending] {
            assert_eq!(names(&sort_friends(&friends, key)), ["first", "second", "third"]);
        }
    }

    #[test]
    fn input_is_untouched() {
        let friends = vec![friend("a", Some(1), None, false), friend("b", Some(2), None, false)];
        let refs: Vec<&FriendRecord> = friends.iter().collect();
        let sorted = sort_friends(refs.iter().copied(), SortKey::AgeDescending);
        assert_eq!(names(&refs), ["a", "b"]);
        assert_eq!(names(&sorted), ["b", "a"]);
    }
}
