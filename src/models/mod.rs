//! Data models for the draw feed
//!
//! Canonical draw records plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod draw;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use draw::{CandidateRecord, DrawPayload, DrawRecord, GameType, SixPlusOneDraw, ThreeDigitDraw};
pub use requests::{DrawQuery, MAX_LIMIT};
pub use responses::{ClearCacheResponse, DrawsResponse, HealthResponse, StatsResponse};
