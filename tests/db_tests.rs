use mbti_graph::db::*;
use mbti_graph::error::GraphError;
use mbti_graph::model::*;
use mbti_graph::reference::ReferenceData;
use mbti_graph::store::{FriendStore, FRIENDS_KEY};

// ==========================================================================
// KEY-VALUE REPO
// ==========================================================================

#[test]
fn missing_key_reads_none() {
    let conn = schema::test_connection();
    assert_eq!(kv_repo::get_value(&conn, "nope").unwrap(), None);
}

#[test]
fn put_overwrites_existing_value() {
    let conn = schema::test_connection();
    kv_repo::put_value(&conn, "k", "one").unwrap();
    kv_repo::put_value(&conn, "k", "two").unwrap();
    assert_eq!(kv_repo::get_value(&conn, "k").unwrap().as_deref(), Some("two"));
}

#[test]
fn initialize_is_repeatable() {
    let conn = schema::test_connection();
    kv_repo::put_value(&conn, "k", "v").unwrap();
    schema::initialize(&conn).unwrap();
    assert_eq!(kv_repo::get_value(&conn, "k").unwrap().as_deref(), Some("v"));
}

// ==========================================================================
// FRIEND STORE PERSISTENCE
// ==========================================================================

#[test]
fn first_load_seeds_demo_roster() {
    let conn = schema::test_connection();
    let store = FriendStore::load_or_seed(&conn, &ReferenceData::builtin(), 1_000_000_000_000).unwrap();
    assert_eq!(store.len(), 12);
    assert!(kv_repo::get_value(&conn, FRIENDS_KEY).unwrap().is_some());
}

#[test]
fn empty_roster_is_not_reseeded() {
    let conn = schema::test_connection();
    FriendStore::default().save(&conn).unwrap();

    let store = FriendStore::load_or_seed(&conn, &ReferenceData::builtin(), 0).unwrap();
    assert!(store.is_empty());
}

#[test]
fn saved_roster_round_trips() {
    let conn = schema::test_connection();
    let mut f = FriendRecord::create("小王".into(), "男".into(), "INTJ".into());
    f.groups = vec!["公司".into()];
    f.is_pinned = true;
    f.created_at = Some(42);
    f.nationality = Some("中国".into());
    f.province = Some("上海".into());
    let store = FriendStore::new(vec![f.clone()]).unwrap();
    store.save(&conn).unwrap();

    let loaded = FriendStore::load(&conn).unwrap().unwrap();
    assert_eq!(loaded.friends(), &[f][..]);
}

#[test]
fn legacy_blob_is_migrated_on_load() {
    let conn = schema::test_connection();
    let blob = r#"[
        {"id": 1, "name": "小王", "gender": "男", "mbti": "INTJ", "group": "公司", "hometown": "浙江"},
        {"id": 2, "name": "小李", "gender": "女", "mbti": "INFJ", "age": "24"}
    ]"#;
    kv_repo::put_value(&conn, FRIENDS_KEY, blob).unwrap();

    let store = FriendStore::load(&conn).unwrap().unwrap();
    let friends = store.friends();
    assert_eq!(friends.len(), 2);

    assert_eq!(friends[0].id.as_str(), "1");
    assert_eq!(friends[0].groups, vec!["公司".to_string()]);
    assert_eq!(friends[0].province.as_deref(), Some("浙江"));
    assert_eq!(friends[0].nationality.as_deref(), Some("中国"));

    assert!(friends[1].groups.is_empty());
    assert_eq!(friends[1].province.as_deref(), Some("北京"));
    assert_eq!(friends[1].age, Some(24));

    // Saved back without the legacy keys.
    store.save(&conn).unwrap();
    let saved = kv_repo::get_value(&conn, FRIENDS_KEY).unwrap().unwrap();
    assert!(!saved.contains("\"group\""));
    assert!(!saved.contains("hometown"));
}

#[test]
fn duplicate_stored_ids_keep_first() {
    let conn = schema::test_connection();
    let blob = r#"[
        {"id": "1", "name": "A", "gender": "男", "mbti": "INTJ"},
        {"id": "1", "name": "B", "gender": "女", "mbti": "ENFP"}
    ]"#;
    kv_repo::put_value(&conn, FRIENDS_KEY, blob).unwrap();

    let store = FriendStore::load(&conn).unwrap().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.friends()[0].name, "A");
    assert_eq!(store.unreadable_count(), 1);

    // The repeated record is still in the blob after a save.
    store.save(&conn).unwrap();
    let saved = kv_repo::get_value(&conn, FRIENDS_KEY).unwrap().unwrap();
    assert!(saved.contains("\"B\""));
}

#[test]
fn loosely_shaped_records_survive_load_and_save() {
    let conn = schema::test_connection();
    let blob = r#"[
        {"id": 1, "name": "甲", "gender": "男", "mbti": "INTJ", "isPinned": null},
        {"id": 2, "name": "乙", "gender": "女", "mbti": "ENFP", "tags": null},
        {"id": 3, "name": "丙", "gender": "男", "mbti": "ISTJ", "groups": "公司"},
        {"id": 4, "name": "丁", "gender": "女", "mbti": "INFJ"}
    ]"#;
    kv_repo::put_value(&conn, FRIENDS_KEY, blob).unwrap();

    let store = FriendStore::load(&conn).unwrap().unwrap();
    let ids: Vec<&str> = store.friends().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert!(!store.friends()[0].is_pinned);
    assert!(store.friends()[1].tags.is_empty());
    assert_eq!(store.friends()[2].groups, vec!["公司".to_string()]);

    store.save(&conn).unwrap();
    let reloaded = FriendStore::load(&conn).unwrap().unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.unreadable_count(), 0);
}

#[test]
fn undecodable_entries_are_written_back() {
    let conn = schema::test_connection();
    let blob = r#"[
        {"id": "1", "name": "甲", "gender": "男", "mbti": "INTJ"},
        {"name": "no id", "gender": "女", "mbti": "ENFP"},
        42
    ]"#;
    kv_repo::put_value(&conn, FRIENDS_KEY, blob).unwrap();

    let store = FriendStore::load(&conn).unwrap().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.unreadable_count(), 2);

    store.save(&conn).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&kv_repo::get_value(&conn, FRIENDS_KEY).unwrap().unwrap()).unwrap();
    let entries = saved.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["name"], "no id");
    assert_eq!(entries[2], 42);
}

#[test]
fn corrupt_blob_is_an_error() {
    let conn = schema::test_connection();
    kv_repo::put_value(&conn, FRIENDS_KEY, "not json").unwrap();
    assert!(matches!(FriendStore::load(&conn), Err(GraphError::Json(_))));
}

#[test]
fn store_rejects_duplicate_ids() {
    let mut a = FriendRecord::create("A".into(), "男".into(), "INTJ".into());
    let b = FriendRecord::create("B".into(), "女".into(), "ENFP".into());
    a.id = b.id.clone();
    assert!(matches!(
        FriendStore::new(vec![a, b]),
        Err(GraphError::AlreadyExists { .. })
    ));
}
