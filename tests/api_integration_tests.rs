//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against fake sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lottery_feed::{
    api::create_router,
    cache::DrawCache,
    error::{NetworkError, SourceError},
    models::{DrawRecord, GameType, SixPlusOneDraw, ThreeDigitDraw},
    orchestrator::FallbackOrchestrator,
    schedule::DrawCalendar,
    service::DrawService,
    sources::DrawSource,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

struct FakeSource {
    name: &'static str,
    game: GameType,
    records: usize,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new(name: &'static str, game: GameType, records: usize) -> Arc<Self> {
        Arc::new(Self {
            name,
            game,
            records,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn three_digit(period: u32) -> DrawRecord {
    DrawRecord::ThreeDigit(ThreeDigitDraw {
        period: period.to_string(),
        date: "2024-09-01".to_string(),
        number: "507".to_string(),
        sum: 12,
        span: 7,
        odd_count: 2,
        even_count: 1,
        big_count: 2,
        small_count: 1,
    })
}

fn six_plus_one(period: u32) -> DrawRecord {
    DrawRecord::SixPlusOne(SixPlusOneDraw {
        period: period.to_string(),
        date: "2024-09-01".to_string(),
        red_balls: vec![3, 9, 14, 20, 27, 33],
        blue_ball: 11,
        red_sum: 106,
        red_odd_count: 4,
        red_even_count: 2,
        red_big_count: 3,
        red_small_count: 3,
    })
}

#[async_trait]
impl DrawSource for FakeSource {
    fn name(&self) -> &str {
        self.name
    }

    fn game(&self) -> GameType {
        self.game
    }

    async fn load(&self) -> Result<Vec<DrawRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.records == 0 {
            return Err(SourceError::Network(NetworkError::Timeout("upstream".into())));
        }
        // Newest first
        Ok((0..self.records as u32)
            .map(|i| 2024250 - i)
            .map(|period| match self.game {
                GameType::ThreeDigit => three_digit(period),
                GameType::SixPlusOne => six_plus_one(period),
            })
            .collect())
    }
}

fn create_app(sources: Vec<Arc<FakeSource>>) -> Router {
    let orchestrator = FallbackOrchestrator::new()
        .with_sources(sources.into_iter().map(|s| s as Arc<dyn DrawSource>));
    let service = DrawService::new(DrawCache::new(300), orchestrator, DrawCalendar::default());
    create_router(AppState::new(service, 300))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Draw Endpoint Tests ==

#[tokio::test]
async fn test_three_digit_success_shape() {
    let source = FakeSource::new("primary", GameType::ThreeDigit, 20);
    let app = create_app(vec![source]);

    let response = app.oneshot(get("/api/three-digit?limit=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 10);
    assert_eq!(json["source"], "primary");

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    // Newest record is rewritten to the upcoming draw
    assert_eq!(data[0]["period"], "2024251");
    assert_eq!(data[1]["period"], "2024249");
    assert_eq!(data[1]["number"], "507");
    assert_eq!(data[1]["oddCount"], 2);
    assert_eq!(data[1]["bigCount"], 2);
}

#[tokio::test]
async fn test_six_plus_one_field_names() {
    let app = create_app(vec![FakeSource::new("tables", GameType::SixPlusOne, 3)]);

    let response = app.oneshot(get("/api/six-plus-one")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 3);
    let draw = &json["data"][2];
    assert_eq!(draw["redBalls"], serde_json::json!([3, 9, 14, 20, 27, 33]));
    assert_eq!(draw["blueBall"], 11);
    assert_eq!(draw["redSum"], 106);
    assert_eq!(draw["redBigCount"], 3);
}

#[tokio::test]
async fn test_fallback_reports_winning_source() {
    let down = FakeSource::new("down", GameType::ThreeDigit, 0);
    let backup = FakeSource::new("backup", GameType::ThreeDigit, 5);
    let spare = FakeSource::new("spare", GameType::ThreeDigit, 5);
    let app = create_app(vec![down.clone(), backup.clone(), spare.clone()]);

    let response = app.oneshot(get("/api/three-digit")).await.unwrap();
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["source"], "backup");
    assert_eq!((down.calls(), backup.calls(), spare.calls()), (1, 1, 0));
}

#[tokio::test]
async fn test_all_sources_fail_is_500() {
    let app = create_app(vec![
        FakeSource::new("a", GameType::ThreeDigit, 0),
        FakeSource::new("b", GameType::ThreeDigit, 0),
    ]);

    let response = app.oneshot(get("/api/three-digit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("three-digit"));
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_limit_is_400() {
    let source = FakeSource::new("primary", GameType::ThreeDigit, 5);
    let app = create_app(vec![source.clone()]);

    for uri in [
        "/api/three-digit?limit=0",
        "/api/three-digit?limit=1001",
        "/api/three-digit?limit=abc",
        "/api/three-digit?limit=1&limit=2",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let json = body_to_json(response.into_body()).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::json!([]));
    }
    assert_eq!(source.calls(), 0);
}

// == Cache Tests ==

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
    let source = FakeSource::new("primary", GameType::ThreeDigit, 5);
    let app = create_app(vec![source.clone()]);

    let first = app.clone().oneshot(get("/api/three-digit?limit=5")).await.unwrap();
    let first = body_to_json(first.into_body()).await;
    let second = app.clone().oneshot(get("/api/three-digit?limit=5")).await.unwrap();
    let second = body_to_json(second.into_body()).await;

    assert_eq!(first, second);
    assert_eq!(source.calls(), 1);

    let stats = app.oneshot(get("/api/stats")).await.unwrap();
    let stats = body_to_json(stats.into_body()).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["totalEntries"], 1);
    assert_eq!(stats["hitRate"], 0.5);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let source = FakeSource::new("primary", GameType::SixPlusOne, 5);
    let app = create_app(vec![source.clone()]);

    app.clone().oneshot(get("/api/ssq")).await.unwrap();

    let response = app.clone().oneshot(post("/api/clear-cache")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);

    app.clone().oneshot(get("/api/ssq")).await.unwrap();
    assert_eq!(source.calls(), 2);

    let legacy = app.oneshot(post("/api/clear_cache")).await.unwrap();
    assert_eq!(legacy.status(), StatusCode::OK);
}

// == Health Tests ==

#[tokio::test]
async fn test_health_reports_cache_size() {
    let app = create_app(vec![FakeSource::new("primary", GameType::ThreeDigit, 5)]);

    app.clone().oneshot(get("/api/fc3d?limit=2")).await.unwrap();
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].as_str().is_some());
    assert_eq!(json["cacheSize"], 1);
}

// == CORS Tests ==

#[tokio::test]
async fn test_cors_on_success_and_error() {
    let app = create_app(vec![FakeSource::new("primary", GameType::ThreeDigit, 5)]);

    for (uri, status) in [
        ("/api/three-digit", StatusCode::OK),
        ("/api/six-plus-one", StatusCode::INTERNAL_SERVER_ERROR),
        ("/api/three-digit?limit=-1", StatusCode::BAD_REQUEST),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("origin", "https://example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), status, "{}", uri);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*",
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_app(Vec::new());

    let response = app.oneshot(get("/api/powerball")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
