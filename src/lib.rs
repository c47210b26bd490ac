//! Lottery Feed - draw history aggregator
//!
//! Fetches draw records for two lottery games from an ordered chain of
//! unreliable public sources, validates them, caches them briefly and
//! serves them over a small JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod schedule;
pub mod service;
pub mod sources;
pub mod validator;

pub use api::AppState;
pub use config::Config;
