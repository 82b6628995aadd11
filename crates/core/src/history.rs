//! History records and the capacity-bounded buffer that holds them.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Maximum number of records the history retains.
pub const HISTORY_CAPACITY: usize = 200;
/// Page size used when a caller does not supply one.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
/// Largest page size a caller may request.
pub const MAX_HISTORY_LIMIT: i64 = 200;

/// An immutable record of one completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// UUID v4, unique per record.
    pub id: String,
    pub a: f64,
    pub b: f64,
    pub op: Operation,
    pub result: f64,
    /// ISO 8601 / RFC 3339 UTC timestamp string.
    pub created_at: String,
}

impl HistoryItem {
    /// Stamp a fresh record with a new id and the current UTC time.
    pub fn new(a: f64, b: f64, op: Operation, result: f64) -> Self {
        HistoryItem {
            id: uuid::Uuid::new_v4().to_string(),
            a,
            b,
            op,
            result,
            created_at: now_rfc3339(),
        }
    }
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Insertion-ordered history, oldest first, never longer than its capacity.
///
/// Pushing past capacity evicts from the head until the length equals the
/// capacity again.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    items: VecDeque<HistoryItem>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl HistoryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        HistoryBuffer {
            items: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY) + 1),
            capacity,
        }
    }

    /// Append `item` at the tail, then evict the oldest excess items.
    ///
    /// Returns how many items were evicted.
    pub fn push(&mut self, item: HistoryItem) -> usize {
        self.items.push_back(item);
        let excess = self.items.len().saturating_sub(self.capacity);
        self.items.drain(..excess);
        excess
    }

    /// Up to `limit` most recent items, newest first.
    pub fn latest(&self, limit: usize) -> Vec<HistoryItem> {
        self.items.iter().rev().take(limit).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }
}
