use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::options::LocationLevel;

/// One person in the roster.
///
/// Optional fields follow a fixed default policy: a missing `age` or
/// `created_at` counts as 0 when sorting, a missing location keeps the
/// record out of geographic buckets, and missing text never matches a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRecord {
    pub id: Id<FriendRecord>,
    pub name: String,
    pub gender: String,
    #[serde(rename = "mbti", alias = "personalityType")]
    pub personality_type: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nationality: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub province: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub education: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(
        default,
        deserialize_with = "lenient::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}

impl FriendRecord {
    /// A bare record with a fresh id. Used by tests and seed data; real
    /// submissions go through `ops::friend_ops::submit_friend`.
    pub fn create(name: String, gender: String, personality_type: String) -> Self {
        Self {
            id: Id::generate(),
            name,
            gender,
            personality_type,
            birth_date: None,
            age: None,
            nationality: None,
            province: None,
            city: None,
            education: None,
            groups: Vec::new(),
            tags: Vec::new(),
            is_pinned: false,
            created_at: None,
        }
    }

    pub fn age_or_zero(&self) -> u32 {
        self.age.unwrap_or(0)
    }

    pub fn created_at_or_zero(&self) -> i64 {
        self.created_at.unwrap_or(0)
    }

    pub fn in_group(&self, label: &str) -> bool {
        self.groups.iter().any(|g| g == label)
    }

    /// The location string used for the given map granularity.
    pub fn location(&self, level: LocationLevel) -> Option<&str> {
        match level {
            LocationLevel::Province => self.province.as_deref(),
            LocationLevel::City => self.city.as_deref(),
        }
    }
}

/// The editable part of a record, as handed over by a form.
///
/// `id` is `None` for a new friend. `age` is only consulted when no
/// `birth_date` is given.
#[derive(Debug, Clone, Default)]
pub struct FriendDraft {
    pub id: Option<Id<FriendRecord>>,
    pub name: String,
    pub gender: String,
    pub personality_type: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<u32>,
    pub nationality: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub education: Option<String>,
    pub groups: Vec<String>,
}

impl FriendDraft {
    pub fn new(name: &str, gender: &str, personality_type: &str) -> Self {
        Self {
            name: name.to_string(),
            gender: gender.to_string(),
            personality_type: personality_type.to_string(),
            ..Self::default()
        }
    }

    /// Prefills a draft from an existing record for editing.
    pub fn from_record(record: &FriendRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            gender: record.gender.clone(),
            personality_type: record.personality_type.clone(),
            birth_date: record.birth_date,
            age: record.age,
            nationality: record.nationality.clone(),
            province: record.province.clone(),
            city: record.city.clone(),
            education: record.education.clone(),
            groups: record.groups.clone(),
        }
    }
}

/// Deserializers that accept the loosely-typed values found in stored
/// rosters: empty strings stand for "absent" and numbers may arrive as text.
mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
        Option::<Value>::deserialize(deserializer)
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match raw(deserializer)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn optional_date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Ok(match raw(deserializer)? {
            Some(Value::String(s)) => {
                // Accept full ISO timestamps as well as plain dates.
                let date_part = s.get(..10).unwrap_or(&s);
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
            }
            _ => None,
        })
    }

    pub fn optional_age<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        Ok(match raw(deserializer)? {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .and_then(|n| u32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn optional_timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Ok(match raw(deserializer)? {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
