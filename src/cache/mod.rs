//! Cache Module
//!
//! Provides the in-memory draw payload cache with a fixed TTL.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::{CacheKey, DrawCache};
