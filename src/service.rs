//! Draw service
//!
//! The request pipeline behind both draw endpoints: cache lookup, then the
//! fallback chain on a miss, then next-draw adjustment before the fresh
//! payload is stored.

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, CacheKey, CacheStats, DrawCache};
use crate::models::{DrawPayload, GameType};
use crate::orchestrator::FallbackOrchestrator;
use crate::schedule::{adjust_newest, DrawCalendar};

pub struct DrawService {
    cache: Mutex<DrawCache>,
    orchestrator: FallbackOrchestrator,
    calendar: DrawCalendar,
}

impl DrawService {
    pub fn new(cache: DrawCache, orchestrator: FallbackOrchestrator, calendar: DrawCalendar) -> Self {
        Self {
            cache: Mutex::new(cache),
            orchestrator,
            calendar,
        }
    }

    pub fn orchestrator(&self) -> &FallbackOrchestrator {
        &self.orchestrator
    }

    /// Payload of at most `limit` records for `game`, newest first.
    ///
    /// An empty payload means every source failed; it is never cached.
    pub async fn get_draws(&self, game: GameType, limit: usize) -> DrawPayload {
        self.get_draws_at(game, limit, Utc::now()).await
    }

    pub async fn get_draws_at(&self, game: GameType, limit: usize, now: DateTime<Utc>) -> DrawPayload {
        let key = CacheKey::new(game, limit);
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or_else(|_| current_timestamp_ms());

        {
            let mut cache = self.cache.lock().await;
            if let Some(payload) = cache.get_at(&key, now_ms) {
                info!(
                    "Cache hit for {} (limit {}), {} records from {}",
                    game,
                    limit,
                    payload.records.len(),
                    payload.source
                );
                return payload;
            }
        }
        debug!("Cache miss for {} (limit {})", game, limit);

        // The lock is not held across the chain; concurrent misses may both fetch
        let mut payload = self.orchestrator.fetch_draws(game, limit).await;
        if payload.is_empty() {
            return payload;
        }

        payload.records = adjust_newest(payload.records, game, self.calendar.local(now));

        let mut cache = self.cache.lock().await;
        cache.put_at(key, payload.clone(), now_ms);
        payload
    }

    /// Drops every cached payload, returning how many were removed.
    pub async fn clear_cache(&self) -> usize {
        let removed = self.cache.lock().await.clear();
        info!("Cleared {} cached payloads", removed);
        removed
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    pub async fn cache_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}
