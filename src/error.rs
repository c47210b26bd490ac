//! Error types for the draw feed
//!
//! Provides unified error handling using thiserror. Network and parse
//! failures stay inside one source attempt, validation failures drop a
//! single record, and only `ApiError` ever reaches an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Network Error ==
/// Failure of a single outbound request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request did not complete within the per-source timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure, TLS failure and similar
    #[error("connection failed: {0}")]
    Connection(String),

    /// Upstream answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl NetworkError {
    /// Only timeouts are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NetworkError::Timeout(_))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            NetworkError::Status(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            NetworkError::Body(err.to_string())
        } else {
            NetworkError::Connection(err.to_string())
        }
    }
}

// == Parse Error ==
/// Raw payload did not have the shape a parser expects.
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON body is not an object or lacks the items array
    #[error("malformed JSON envelope: {0}")]
    Envelope(String),

    /// Envelope status field carries something other than the success value
    #[error("envelope status {found} does not match expected {expected}")]
    UnexpectedStatus { expected: String, found: String },

    /// None of the configured selectors located a table with usable rows
    #[error("no matching table found")]
    NoTable,

    /// Body is not JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// == Validation Error ==
/// A candidate record broke one of the canonical record invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("period is empty")]
    EmptyPeriod,

    #[error("number must be exactly 3 digits, got {0:?}")]
    BadNumber(String),

    #[error("expected 6 red balls, got {0}")]
    RedBallCount(usize),

    #[error("red ball {0:?} is not an integer in 1..=33")]
    RedBallRange(String),

    #[error("red balls contain duplicates")]
    DuplicateRedBall,

    #[error("blue ball {0:?} is not an integer in 1..=16")]
    BlueBallRange(String),

    #[error("candidate does not belong to game {0}")]
    WrongGame(String),
}

// == Source Error ==
/// Outcome of one failed adapter attempt. The orchestrator logs these and
/// advances the fallback chain; they never reach a caller.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Fetch succeeded but nothing survived parsing and validation
    #[error("no valid records ({candidates} candidates parsed)")]
    NoRecords { candidates: usize },
}

// == API Error ==
/// Errors surfaced by the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad query parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every source for the game came back empty
    #[error("{0}")]
    Unavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
            "data": []
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
