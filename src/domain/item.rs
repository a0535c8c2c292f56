use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of an item (milliseconds since the epoch at creation)
pub type ItemId = i64;

/// A single to-do entry
///
/// This is also the stored shape: `{"id": 1700000000000, "text": "...", "completed": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Key used for duplicate-name detection
    pub fn name_key(&self) -> String {
        name_key(&self.text)
    }

    /// Case-insensitive substring match (the query must already be lower-cased)
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.text.to_lowercase().contains(lowered_query)
    }
}

/// Normalize text for duplicate comparison: trimmed and lower-cased
pub fn name_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Generate a fresh id from the wall clock
///
/// Two items created in the same millisecond (or after the clock stepped
/// backwards) would collide, so the id is bumped past the largest existing one.
/// When that would overflow, the smallest unused positive id is taken instead.
pub fn next_id(existing: &[Item]) -> ItemId {
    let now = Utc::now().timestamp_millis();
    match existing.iter().map(|i| i.id).max() {
        Some(max) if max >= now => max.checked_add(1).unwrap_or_else(|| smallest_unused_id(existing)),
        _ => now,
    }
}

fn smallest_unused_id(existing: &[Item]) -> ItemId {
    let mut ids: Vec<ItemId> = existing.iter().map(|i| i.id).filter(|id| *id > 0).collect();
    ids.sort_unstable();
    ids.dedup();

    let mut candidate = 1;
    for id in ids {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
