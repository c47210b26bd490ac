//! API Handlers
//!
//! HTTP request handlers for each draw feed endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::warn;

use crate::cache::DrawCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearCacheResponse, DrawQuery, DrawsResponse, GameType, HealthResponse, StatsResponse,
    MAX_LIMIT,
};
use crate::orchestrator::FallbackOrchestrator;
use crate::schedule::DrawCalendar;
use crate::service::DrawService;
use crate::sources::{registry::default_sources, HttpFetcher, SourceClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DrawService>,
    /// Limit applied when a request carries none
    pub default_limit: usize,
}

impl AppState {
    pub fn new(service: DrawService, default_limit: usize) -> Self {
        Self {
            service: Arc::new(service),
            default_limit,
        }
    }

    /// Wires the default source chains, cache and draw calendar from
    /// configuration.
    pub fn from_config(config: &Config) -> Self {
        let fetcher: Arc<dyn HttpFetcher> = Arc::new(SourceClient::from_config(config));

        let mut orchestrator = FallbackOrchestrator::new();
        for game in GameType::ALL {
            orchestrator = orchestrator.with_sources(default_sources(
                game,
                Arc::clone(&fetcher),
                config.synthetic_fallback,
            ));
        }

        let service = DrawService::new(
            DrawCache::new(config.cache_ttl),
            orchestrator,
            DrawCalendar::new(config.draw_utc_offset_hours),
        );
        Self::new(service, config.default_limit.clamp(1, MAX_LIMIT))
    }
}

async fn draws_for(
    state: &AppState,
    game: GameType,
    pairs: Vec<(String, String)>,
) -> Result<Json<DrawsResponse>> {
    let limit = DrawQuery::from_pairs(pairs)
        .and_then(|query| query.resolve_limit(state.default_limit))
        .map_err(ApiError::InvalidRequest)?;

    let payload = state.service.get_draws(game, limit).await;
    if payload.is_empty() {
        warn!("No {} data available from any source", game);
        return Err(ApiError::Unavailable(format!(
            "No {} draw data available from any source",
            game
        )));
    }

    Ok(Json(DrawsResponse::new(payload.records, payload.source)))
}

/// Handler for GET /api/three-digit (alias /api/fc3d)
pub async fn three_digit_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DrawsResponse>> {
    draws_for(&state, GameType::ThreeDigit, pairs).await
}

/// Handler for GET /api/six-plus-one (alias /api/ssq)
pub async fn six_plus_one_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<DrawsResponse>> {
    draws_for(&state, GameType::SixPlusOne, pairs).await
}

/// Handler for POST /api/clear-cache (alias /api/clear_cache)
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let removed = state.service.clear_cache().await;
    Json(ClearCacheResponse::cleared(removed))
}

/// Handler for GET /api/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.cache_stats().await))
}

/// Handler for GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service.cache_len().await))
}
