//! JSON framing of the roster: load-time migration of legacy record shapes,
//! plus import/export files.

use std::path::Path;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{GraphError, GraphResult};
use crate::model::FriendRecord;
use crate::validation::normalize_labels;

pub const DEFAULT_NATIONALITY: &str = "中国";
pub const DEFAULT_PROVINCE: &str = "北京";

/// Upgrades one raw stored object to the current record shape and decodes it.
///
/// - a legacy `group` string becomes a one-element `groups` list
/// - missing `nationality` / `province` get defaults (`hometown` first)
/// - numeric ids become strings
pub fn migrate_record(raw: Value) -> GraphResult<FriendRecord> {
    let mut obj = match raw {
        Value::Object(obj) => obj,
        other => {
            return Err(GraphError::Other(format!(
                "Expected a record object, found {}",
                other
            )))
        }
    };

    if let Some(Value::Number(n)) = obj.get("id") {
        let id = n.to_string();
        obj.insert("id".into(), Value::String(id));
    }

    let legacy_group = obj.remove("group");
    let groups = match obj.remove("groups") {
        Some(Value::Null) | None => legacy_group,
        present => present,
    };
    obj.insert("groups".into(), Value::Array(string_list(groups)));

    let tags = obj.remove("tags");
    obj.insert("tags".into(), Value::Array(string_list(tags)));

    let pinned = obj.get("isPinned").map_or(false, is_truthy);
    obj.insert("isPinned".into(), Value::Bool(pinned));

    if !is_present(&obj, "nationality") {
        obj.insert("nationality".into(), DEFAULT_NATIONALITY.into());
    }
    if !is_present(&obj, "province") {
        let province = obj
            .get("hometown")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_PROVINCE)
            .to_string();
        obj.insert("province".into(), Value::String(province));
    }
    obj.remove("hometown");

    let mut record: FriendRecord = serde_json::from_value(Value::Object(obj))?;
    record.groups = normalize_labels(&record.groups);
    Ok(record)
}

/// A label list from a loosely shaped value: a bare string becomes one label,
/// non-string entries and anything else are dropped.
fn string_list(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::String(s)) => vec![Value::String(s)],
        Some(Value::Array(items)) => items.into_iter().filter(Value::is_string).collect(),
        _ => Vec::new(),
    }
}

fn is_present(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// A stored roster split into the records that decoded and the raw entries
/// that did not. The raw entries must be written back unchanged on save.
#[derive(Debug, Default)]
pub struct DecodedRoster {
    pub friends: Vec<FriendRecord>,
    pub unreadable: Vec<Value>,
}

/// Decodes a stored roster blob. Entries that cannot be decoded are kept
/// aside in `unreadable`.
pub fn decode_roster(blob: &str) -> GraphResult<DecodedRoster> {
    let raw: Vec<Value> = serde_json::from_str(blob)?;
    let total = raw.len();

    let mut decoded = DecodedRoster {
        friends: Vec::with_capacity(total),
        unreadable: Vec::new(),
    };
    for (idx, value) in raw.into_iter().enumerate() {
        match migrate_record(value.clone()) {
            Ok(record) => decoded.friends.push(record),
            Err(e) => {
                warn!(index = idx, error = %e, "keeping unreadable stored record as is");
                decoded.unreadable.push(value);
            }
        }
    }

    debug!(
        decoded = decoded.friends.len(),
        unreadable = decoded.unreadable.len(),
        total,
        "decoded stored roster"
    );
    Ok(decoded)
}

pub fn encode_roster(friends: &[FriendRecord]) -> GraphResult<String> {
    Ok(serde_json::to_string_pretty(friends)?)
}

/// Validates an import payload: a JSON array whose elements all carry a
/// non-empty `id`, `name`, `mbti` and `gender`.
pub fn parse_import(json: &str) -> GraphResult<Vec<FriendRecord>> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(GraphError::InvalidImport(
                "expected an array of records".into(),
            ))
        }
    };

    for (idx, item) in items.iter().enumerate() {
        let missing: Vec<&str> = ["id", "name", "mbti", "gender"]
            .into_iter()
            .filter(|key| !is_truthy(&item[*key]))
            .collect();
        if !missing.is_empty() {
            return Err(GraphError::InvalidImport(format!(
                "record {} is missing {}",
                idx,
                missing.join(", ")
            )));
        }
    }

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            migrate_record(item)
                .map_err(|e| GraphError::InvalidImport(format!("record {}: {}", idx, e)))
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        _ => true,
    }
}

/// Reads and validates an import file.
pub fn import_json(path: &Path) -> GraphResult<Vec<FriendRecord>> {
    let json = std::fs::read_to_string(path)?;
    let friends = parse_import(&json)?;
    info!(path = %path.display(), count = friends.len(), "parsed import file");
    Ok(friends)
}

/// Writes the roster as pretty JSON. Returns the number of records written.
pub fn export_json(path: &Path, friends: &[FriendRecord]) -> GraphResult<usize> {
    std::fs::write(path, encode_roster(friends)?)?;
    info!(path = %path.display(), count = friends.len(), "exported roster");
    Ok(friends.len())
}

pub fn default_export_file_name(today: NaiveDate) -> String {
    format!("mbti_data_backup_{}.json", today.format("%Y-%m-%d"))
}
