//! API Routes
//!
//! Configures the Axum router with all draw feed endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, health_handler, six_plus_one_handler, stats_handler,
    three_digit_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/three-digit` (alias `/api/fc3d`) - Three-digit draws
/// - `GET /api/six-plus-one` (alias `/api/ssq`) - Six-plus-one draws
/// - `POST /api/clear-cache` (alias `/api/clear_cache`) - Drop cached payloads
/// - `GET /api/stats` - Cache statistics
/// - `GET /api/health` - Health check endpoint
///
/// CORS allows any origin, method and header on every response, error
/// responses and preflights included.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/three-digit", get(three_digit_handler))
        .route("/api/fc3d", get(three_digit_handler))
        .route("/api/six-plus-one", get(six_plus_one_handler))
        .route("/api/ssq", get(six_plus_one_handler))
        .route("/api/clear-cache", post(clear_cache_handler))
        .route("/api/clear_cache", post(clear_cache_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
