use chrono::NaiveDate;
use mbti_graph::model::*;
use mbti_graph::queries::*;
use mbti_graph::reference::ReferenceData;
use mbti_graph::store::demo_roster;

fn friend(id: &str, mbti: &str) -> FriendRecord {
    let mut f = FriendRecord::create(format!("f{}", id), "男".into(), mbti.into());
    f.id = Id::new(id);
    f
}

fn demo() -> Vec<FriendRecord> {
    demo_roster(&ReferenceData::builtin(), 1_700_000_000_000)
}

fn ids(friends: &[&FriendRecord]) -> Vec<String> {
    friends.iter().map(|f| f.id.to_string()).collect()
}

// ==========================================================================
// TAXONOMY
// ==========================================================================

#[test]
fn custom_groups_are_sorted_and_led_by_all() {
    let reference = ReferenceData::builtin();
    let roster = demo();
    let groups = taxonomy_queries::group_options(&roster, Dimension::Custom, &reference);

    assert_eq!(groups[0], GroupFilter::All);
    let labels: Vec<&str> = groups[1..].iter().map(|g| g.label()).collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
    assert_eq!(labels.len(), 4);
}

#[test]
fn demographic_groups_ignore_data() {
    let reference = ReferenceData::builtin();
    let groups = taxonomy_queries::group_options(&[], Dimension::Demographic, &reference);
    assert_eq!(
        groups,
        vec![
            GroupFilter::All,
            GroupFilter::Label("男".into()),
            GroupFilter::Label("女".into())
        ]
    );
}

#[test]
fn switching_dimension_resets_group() {
    let mut state = view_queries::ViewState::default();
    state.group = GroupFilter::Label("公司".into());
    state.set_dimension(Dimension::Demographic);
    assert_eq!(state.group, GroupFilter::All);
}

// ==========================================================================
// FILTER
// ==========================================================================

#[test]
fn filtering_is_idempotent() {
    let roster = demo();
    let criteria = filter_queries::FilterCriteria {
        dimension: Dimension::Custom,
        group: GroupFilter::Label("大学同学".into()),
        query: "本科".into(),
    };

    let once = filter_queries::filter_friends(&roster, &criteria);
    let twice = filter_queries::filter_friends(once.iter().copied(), &criteria);
    assert!(!once.is_empty());
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn text_query_matches_province_only_record() {
    let mut f = friend("1", "INTJ");
    f.name = "Alice".into();
    f.province = Some("北京".into());
    let roster = vec![f];

    let hit = filter_queries::FilterCriteria {
        query: "北京".into(),
        ..Default::default()
    };
    assert_eq!(filter_queries::filter_friends(&roster, &hit).len(), 1);

    let miss = filter_queries::FilterCriteria {
        query: "xyz".into(),
        ..Default::default()
    };
    assert!(filter_queries::filter_friends(&roster, &miss).is_empty());
}

#[test]
fn demographic_group_filters_by_gender() {
    let roster = demo();
    let criteria = filter_queries::FilterCriteria {
        dimension: Dimension::Demographic,
        group: GroupFilter::Label("女".into()),
        query: String::new(),
    };
    let result = filter_queries::filter_friends(&roster, &criteria);
    assert_eq!(result.len(), 7);
    assert!(result.iter().all(|f| f.gender == "女"));
}

// ==========================================================================
// SORT
// ==========================================================================

#[test]
fn sorting_keeps_every_record_and_pins_first() {
    let mut roster = demo();
    roster[3].is_pinned = true;
    roster[9].is_pinned = true;

    for key in [SortKey::MostRecent, SortKey::AgeAscending, SortKey::AgeDescending] {
        let sorted = sort_queries::sort_friends(&roster, key);
        assert_eq!(sorted.len(), roster.len());
        for pair in sorted.windows(2) {
            assert!(!pair[1].is_pinned || pair[0].is_pinned);
        }
    }
}

#[test]
fn equal_created_at_keeps_input_order() {
    let mut a = friend("a", "INTJ");
    let mut b = friend("b", "ENFP");
    let mut c = friend("c", "ISTJ");
    a.created_at = Some(5);
    b.created_at = Some(5);
    c.created_at = Some(9);
    let roster = vec![a, b, c];

    let sorted = sort_queries::sort_friends(&roster, SortKey::MostRecent);
    assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
}

#[test]
fn missing_age_sorts_as_zero() {
    let mut a = friend("a", "INTJ");
    let b = friend("b", "ENFP");
    a.age = Some(30);
    let roster = vec![a, b];

    let asc = sort_queries::sort_friends(&roster, SortKey::AgeAscending);
    assert_eq!(ids(&asc), vec!["b", "a"]);
}

#[test]
fn pinning_moves_record_to_front_only() {
    let mut roster = demo();
    let before = sort_queries::sort_friends(&roster, SortKey::MostRecent);
    let before_ids = ids(&before);

    let target = before_ids[5].clone();
    for f in roster.iter_mut() {
        if f.id.as_str() == target {
            f.is_pinned = true;
        }
    }

    let after = ids(&sort_queries::sort_friends(&roster, SortKey::MostRecent));
    assert_eq!(after[0], target);
    let rest: Vec<String> = before_ids.into_iter().filter(|id| *id != target).collect();
    assert_eq!(after[1..].to_vec(), rest);
}

// ==========================================================================
// AGGREGATION
// ==========================================================================

#[test]
fn distribution_sums_to_subset_size() {
    let reference = ReferenceData::builtin();
    let mut roster = demo();
    roster.push(friend("x", "ABCD"));

    for mode in [DistributionMode::Coarse, DistributionMode::Fine] {
        let entries = stats_queries::distribution(&roster, mode, &reference);
        let sum: usize = entries.iter().map(|e| e.count).sum();
        assert_eq!(sum, roster.len());
        assert!(entries.iter().all(|e| e.count > 0));
        assert!(entries.windows(2).all(|w| w[0].count >= w[1].count));
    }
}

#[test]
fn unknown_type_falls_into_default_group() {
    let reference = ReferenceData::builtin();
    let roster = vec![friend("x", "ABCD")];
    let entries = stats_queries::distribution(&roster, DistributionMode::Coarse, &reference);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "守护者");
}

#[test]
fn empty_roster_aggregates_to_nothing() {
    let reference = ReferenceData::builtin();
    let view = view_queries::compute_view(&[], &view_queries::ViewState::default(), &reference);
    assert!(view.friends.is_empty());
    assert!(view.distribution.is_empty());
    assert!(view.geo.is_empty());
    assert!(view.edges.is_empty());
    assert_eq!(view.groups, vec![GroupFilter::All]);
}

#[test]
fn geo_buckets_skip_missing_province() {
    let reference = ReferenceData::builtin();
    let mut a = friend("a", "INTJ");
    let mut b = friend("b", "INTJ");
    let c = friend("c", "ENFP");
    a.province = Some("广东".into());
    b.province = Some("广东".into());
    let roster = vec![a, b, c];

    let buckets = geo_queries::geo_buckets(&roster, LocationLevel::Province, &reference);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].total, 2);
    assert_eq!(buckets[0].map_name, "广东省");
    assert_eq!(buckets[0].types[0].count, 2);
}

#[test]
fn best_match_pair_yields_one_edge() {
    let reference = ReferenceData::builtin();
    let roster = vec![friend("1", "INTJ"), friend("2", "ENFP")];
    let refs: Vec<&FriendRecord> = roster.iter().collect();

    let edges = relationship_queries::relationship_edges(&refs, &reference);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].kind, relationship_queries::EdgeKind::BestMatch);
    assert_eq!(edges[0].source.as_str(), "1");
    assert_eq!(edges[0].target.as_str(), "2");
}

#[test]
fn edges_are_bounded_and_unique() {
    let reference = ReferenceData::builtin();
    let roster = demo();
    let refs: Vec<&FriendRecord> = roster.iter().collect();
    let n = refs.len();

    let edges = relationship_queries::relationship_edges(&refs, &reference);
    assert!(edges.len() <= n * (n - 1) / 2);

    let mut seen = std::collections::HashSet::new();
    for e in &edges {
        assert_ne!(e.source, e.target);
        let mut pair = [e.source.to_string(), e.target.to_string()];
        pair.sort();
        assert!(seen.insert(pair));
    }
}

#[test]
fn unknown_types_never_link() {
    let reference = ReferenceData::builtin();
    let roster = vec![friend("1", "ABCD"), friend("2", "ZZZZ")];
    let refs: Vec<&FriendRecord> = roster.iter().collect();
    assert!(relationship_queries::relationship_edges(&refs, &reference).is_empty());
}

#[test]
fn view_pipeline_aggregates_visible_subset() {
    let reference = ReferenceData::builtin();
    let roster = demo();
    let state = view_queries::ViewState {
        group: GroupFilter::Label("公司".into()),
        ..Default::default()
    };

    let view = view_queries::compute_view(&roster, &state, &reference);
    assert_eq!(view.friends.len(), 4);
    let sum: usize = view.distribution.iter().map(|e| e.count).sum();
    assert_eq!(sum, 4);
    let in_buckets: usize = view.geo.iter().map(|b| b.total).sum();
    assert_eq!(in_buckets, 4);
}

// ==========================================================================
// BIRTHDAYS
// ==========================================================================

#[test]
fn upcoming_birthdays_within_window() {
    let mut a = friend("a", "INTJ");
    let mut b = friend("b", "ENFP");
    a.birth_date = NaiveDate::from_ymd_opt(2000, 6, 10);
    b.birth_date = NaiveDate::from_ymd_opt(1990, 12, 1);
    let roster = vec![a, b];
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let upcoming = birthday_queries::upcoming_birthdays(&roster, today, 30);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].friend.id.as_str(), "a");
    assert_eq!(upcoming[0].days_until, 9);
    assert_eq!(upcoming[0].next_age, 25);
}
