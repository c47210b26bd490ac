//! Cache Store Module
//!
//! Draw payload cache keyed by game and requested limit, with a fixed TTL
//! and lazy expiry.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};
use crate::models::{DrawPayload, GameType};

// == Cache Key ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub game: GameType,
    pub limit: usize,
}

impl CacheKey {
    pub fn new(game: GameType, limit: usize) -> Self {
        Self { game, limit }
    }
}

// == Draw Cache ==
/// In-memory payload cache. Not synchronized itself; the application state
/// wraps it in a mutex so `get` and `put` never interleave.
#[derive(Debug)]
pub struct DrawCache {
    entries: HashMap<CacheKey, CacheEntry>,
    stats: CacheStats,
    /// Time to live in milliseconds
    ttl_ms: u64,
}

impl DrawCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl_secs` seconds.
    /// Oversized values saturate to an effectively unbounded TTL.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl_ms: ttl_secs.saturating_mul(1000),
        }
    }

    // == Get ==
    /// Returns the payload stored under `key` if it has not expired.
    pub fn get(&mut self, key: &CacheKey) -> Option<DrawPayload> {
        self.get_at(key, current_timestamp_ms())
    }

    /// `get` evaluated at an explicit time (Unix milliseconds).
    ///
    /// Expired entries are dropped on lookup and counted as misses.
    pub fn get_at(&mut self, key: &CacheKey, now: u64) -> Option<DrawPayload> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired_at(now, self.ttl_ms) {
            debug!(
                "Cache entry for {} (limit {}) expired",
                key.game, key.limit
            );
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_expired();
            return None;
        }

        self.stats.record_hit();
        Some(entry.payload.clone())
    }

    // == Put ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&mut self, key: CacheKey, payload: DrawPayload) {
        self.put_at(key, payload, current_timestamp_ms());
    }

    /// `put` with an explicit storage time (Unix milliseconds).
    pub fn put_at(&mut self, key: CacheKey, payload: DrawPayload, now: u64) {
        self.entries.insert(key, CacheEntry::new(payload, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
