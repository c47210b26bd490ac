//! Response DTOs for the draw feed API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::DrawRecord;

/// Response body for the draw endpoints
#[derive(Debug, Clone, Serialize)]
pub struct DrawsResponse {
    pub success: bool,
    /// Draws, newest first
    pub data: Vec<DrawRecord>,
    pub count: usize,
    /// Name of the source that produced the payload
    pub source: String,
}

impl DrawsResponse {
    /// Creates a successful DrawsResponse
    pub fn new(data: Vec<DrawRecord>, source: impl Into<String>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            source: source.into(),
        }
    }
}

/// Response body for the clear-cache endpoint (POST /api/clear-cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    pub message: String,
}

impl ClearCacheResponse {
    pub fn cleared(removed: usize) -> Self {
        Self {
            success: true,
            message: format!("Cache cleared ({} entries removed)", removed),
        }
    }
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub hits: u64,
    /// Absent or expired lookups
    pub misses: u64,
    /// Misses caused by an entry outliving the TTL
    pub expired: u64,
    /// Entries currently stored, stale ones included until looked up
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub cache_size: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache_size: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache_size,
        }
    }
}
