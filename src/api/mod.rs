//! API Module
//!
//! HTTP handlers and routing for the draw feed REST API.
//!
//! # Endpoints
//! - `GET /api/three-digit?limit=N` - Three-digit draws, newest first
//! - `GET /api/six-plus-one?limit=N` - Six-plus-one draws, newest first
//! - `POST /api/clear-cache` - Drop all cached payloads
//! - `GET /api/stats` - Cache statistics
//! - `GET /api/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
