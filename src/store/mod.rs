//! The canonical, mutable roster.
//!
//! `FriendStore` is the only owner that mutates records. Everything else in
//! the crate works on `&[FriendRecord]` snapshots handed out by `friends()`.

mod seed;

use std::collections::HashSet;

use rusqlite::Connection;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::db::kv_repo;
use crate::error::{GraphError, GraphResult};
use crate::migrate;
use crate::model::{FriendRecord, Id};
use crate::reference::ReferenceData;

pub use seed::demo_roster;

/// Key under which the roster blob is persisted.
pub const FRIENDS_KEY: &str = "mbti-friends";

#[derive(Debug, Clone, Default)]
pub struct FriendStore {
    friends: Vec<FriendRecord>,
    /// Stored entries that could not be used as records. Written back
    /// untouched after the records on every save.
    unreadable: Vec<Value>,
}

impl FriendStore {
    pub fn new(friends: Vec<FriendRecord>) -> GraphResult<Self> {
        ensure_unique_ids(&friends)?;
        Ok(Self {
            friends,
            unreadable: Vec::new(),
        })
    }

    /// Loads the persisted roster, migrating legacy record shapes. Returns
    /// `None` when nothing has been stored yet.
    pub fn load(conn: &Connection) -> GraphResult<Option<Self>> {
        let blob = match kv_repo::get_value(conn, FRIENDS_KEY)? {
            Some(blob) => blob,
            None => return Ok(None),
        };

        let decoded = migrate::decode_roster(&blob)?;
        let mut unreadable = decoded.unreadable;

        // The first record for an id is live; later ones are set aside.
        let mut seen = HashSet::new();
        let mut friends = Vec::with_capacity(decoded.friends.len());
        for friend in decoded.friends {
            if seen.insert(friend.id.clone()) {
                friends.push(friend);
            } else {
                warn!(id = %friend.id, "setting aside record with repeated id");
                unreadable.push(serde_json::to_value(&friend)?);
            }
        }

        info!(count = friends.len(), unreadable = unreadable.len(), "loaded roster");
        Ok(Some(Self { friends, unreadable }))
    }

    /// Loads the persisted roster, or seeds the demo roster on first run.
    pub fn load_or_seed(
        conn: &Connection,
        reference: &ReferenceData,
        now_ms: i64,
    ) -> GraphResult<Self> {
        match Self::load(conn)? {
            Some(store) => Ok(store),
            None => {
                info!("no stored roster, seeding demo data");
                let store = Self::new(demo_roster(reference, now_ms))?;
                store.save(conn)?;
                Ok(store)
            }
        }
    }

    pub fn save(&self, conn: &Connection) -> GraphResult<()> {
        let blob = if self.unreadable.is_empty() {
            migrate::encode_roster(&self.friends)?
        } else {
            let mut entries = Vec::with_capacity(self.friends.len() + self.unreadable.len());
            for friend in &self.friends {
                entries.push(serde_json::to_value(friend)?);
            }
            entries.extend(self.unreadable.iter().cloned());
            serde_json::to_string_pretty(&entries)?
        };
        kv_repo::put_value(conn, FRIENDS_KEY, &blob)?;
        debug!(count = self.friends.len(), unreadable = self.unreadable.len(), "saved roster");
        Ok(())
    }

    pub fn friends(&self) -> &[FriendRecord] {
        &self.friends
    }

    /// Number of stored entries kept aside because they could not be read.
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn find(&self, id: &Id<FriendRecord>) -> Option<&FriendRecord> {
        self.friends.iter().find(|f| &f.id == id)
    }

    /// Appends a new record.
    pub fn insert(&mut self, record: FriendRecord) -> GraphResult<()> {
        if self.find(&record.id).is_some() {
            return Err(GraphError::AlreadyExists {
                entity_type: "Friend".into(),
                identifier: record.id.to_string(),
            });
        }
        self.friends.push(record);
        Ok(())
    }

    /// Replaces the record with the same id in place. Returns the old record.
    pub fn replace(&mut self, record: FriendRecord) -> GraphResult<FriendRecord> {
        let slot = self
            .friends
            .iter_mut()
            .find(|f| f.id == record.id)
            .ok_or_else(|| not_found(&record.id))?;
        Ok(std::mem::replace(slot, record))
    }

    pub fn remove(&mut self, id: &Id<FriendRecord>) -> GraphResult<FriendRecord> {
        let idx = self
            .friends
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.friends.remove(idx))
    }

    /// Flips `is_pinned` and nothing else. Returns the updated record.
    pub fn toggle_pin(&mut self, id: &Id<FriendRecord>) -> GraphResult<FriendRecord> {
        let record = self
            .friends
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| not_found(id))?;
        record.is_pinned = !record.is_pinned;
        Ok(record.clone())
    }

    /// Swaps in a whole new roster (used by import). Entries kept aside at
    /// load are discarded with the old roster.
    pub fn replace_all(&mut self, friends: Vec<FriendRecord>) -> GraphResult<()> {
        ensure_unique_ids(&friends)?;
        if !self.unreadable.is_empty() {
            info!(discarded = self.unreadable.len(), "import discards unreadable stored entries");
        }
        self.friends = friends;
        self.unreadable.clear();
        Ok(())
    }
}

fn not_found(id: &Id<FriendRecord>) -> GraphError {
    GraphError::NotFound {
        entity_type: "Friend".into(),
        id: id.to_string(),
    }
}

fn ensure_unique_ids(friends: &[FriendRecord]) -> GraphResult<()> {
    let mut seen = HashSet::new();
    for f in friends {
        if !seen.insert(&f.id) {
            return Err(GraphError::AlreadyExists {
                entity_type: "Friend".into(),
                identifier: f.id.to_string(),
            });
        }
    }
    Ok(())
}
