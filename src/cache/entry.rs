//! Cache Entry Module
//!
//! Defines a stored draw payload together with the time it was stored.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::DrawPayload;

// == Cache Entry ==
/// A payload and its storage timestamp. Entries are never modified after
/// insertion; a newer `put` replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: DrawPayload,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stored at `stored_at` (Unix milliseconds).
    pub fn new(payload: DrawPayload, stored_at: u64) -> Self {
        Self { payload, stored_at }
    }

    // == Is Expired ==
    /// Checks whether the entry is logically absent at `now`.
    ///
    /// An entry is valid only while `now - stored_at < ttl`. A `stored_at`
    /// in the future (clock skew) also counts as expired so the cache fails
    /// open to a refetch.
    pub fn is_expired_at(&self, now: u64, ttl_ms: u64) -> bool {
        match now.checked_sub(self.stored_at) {
            Some(age) => age >= ttl_ms,
            None => true,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
