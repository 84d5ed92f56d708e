use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{GraphError, GraphResult};
use crate::model::{FriendDraft, FriendRecord, Id};
use crate::queries::birthday_queries::age_on;
use crate::reference::ReferenceData;
use crate::store::FriendStore;
use crate::validation::{self, normalize_labels, trim_optional};

/// Creates a record (draft without id) or replaces an existing one.
///
/// Edits keep the stored `created_at` and `is_pinned`. `age` is derived
/// from `birth_date` when one is given; `tags` always come from the type.
pub fn submit_friend(
    store: &mut FriendStore,
    draft: FriendDraft,
    reference: &ReferenceData,
    today: NaiveDate,
    now_ms: i64,
) -> GraphResult<FriendRecord> {
    let name = validation::non_blank(&draft.name, "name")?;
    let gender = validation::non_blank(&draft.gender, "gender")?;
    let personality_type = validation::non_blank(&draft.personality_type, "mbti")?.to_uppercase();

    if !reference.is_known_type(&personality_type) {
        warn!(personality_type = %personality_type, "submitting friend with unknown type");
    }

    let age = match draft.birth_date {
        Some(birth) => Some(age_on(birth, today)),
        None => draft.age,
    };

    let mut record = FriendRecord {
        id: Id::generate(),
        name,
        gender,
        tags: reference.tags_for(&personality_type),
        personality_type,
        birth_date: draft.birth_date,
        age,
        nationality: trim_optional(draft.nationality.as_deref()),
        province: trim_optional(draft.province.as_deref()),
        city: trim_optional(draft.city.as_deref()),
        education: trim_optional(draft.education.as_deref()),
        groups: normalize_labels(&draft.groups),
        is_pinned: false,
        created_at: Some(now_ms),
    };

    match draft.id {
        Some(id) => {
            let existing = store
                .find(&id)
                .cloned()
                .ok_or_else(|| GraphError::NotFound {
                    entity_type: "Friend".into(),
                    id: id.to_string(),
                })?;
            record.id = id;
            record.created_at = existing.created_at.or(Some(now_ms));
            record.is_pinned = existing.is_pinned;
            store.replace(record.clone())?;
            info!(id = %record.id, "updated friend");
        }
        None => {
            store.insert(record.clone())?;
            info!(id = %record.id, "added friend");
        }
    }

    Ok(record)
}

/// Irreversibly removes a record.
pub fn delete_friend(store: &mut FriendStore, id: &Id<FriendRecord>) -> GraphResult<FriendRecord> {
    let removed = store.remove(id)?;
    info!(id = %removed.id, "deleted friend");
    Ok(removed)
}

pub fn toggle_pin(store: &mut FriendStore, id: &Id<FriendRecord>) -> GraphResult<FriendRecord> {
    let record = store.toggle_pin(id)?;
    info!(id = %record.id, pinned = record.is_pinned, "toggled pin");
    Ok(record)
}

/// Replaces the whole roster with imported records. Returns the new count.
pub fn import_friends(store: &mut FriendStore, friends: Vec<FriendRecord>) -> GraphResult<usize> {
    let previous = store.len();
    store.replace_all(friends)?;
    info!(previous, imported = store.len(), "replaced roster from import");
    Ok(store.len())
}

/// Finds records whose name contains `query` (case-insensitive). An exact
/// name match, if any, is returned alone.
pub fn find_by_name<'a>(store: &'a FriendStore, query: &str) -> Vec<&'a FriendRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches: Vec<&FriendRecord> = store
        .friends()
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect();

    match matches.iter().find(|f| f.name.to_lowercase() == needle) {
        Some(exact) => vec![*exact],
        None => matches,
    }
}
