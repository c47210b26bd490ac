//! Outbound HTTP client for upstream draw sources.
//!
//! One GET per attempt with a per-request timeout. Timeouts are retried a
//! bounded number of times with a fixed delay; every other failure is
//! returned immediately. The body is handed back untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::NetworkError;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/120.0.0.0 Safari/537.36";

/// Endpoint, query pairs and extra headers for one upstream request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl SourceRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Attempt budget for timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Anything that can turn a `SourceRequest` into raw bytes.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, request: &SourceRequest) -> Result<Vec<u8>, NetworkError>;
}

/// reqwest-backed fetcher used for every real source.
#[derive(Clone)]
pub struct SourceClient {
    client: reqwest::Client,
    timeout: Duration,
    retry: RetryPolicy,
}

impl SourceClient {
    /// Create a client with a browser user agent.
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/json;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to a bare HTTP client without browser headers: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            timeout,
            retry,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.request_timeout(),
            RetryPolicy {
                max_attempts: config.max_retries.max(1),
                delay: config.retry_delay(),
            },
        )
    }

    async fn fetch_once(&self, request: &SourceRequest) -> Result<Vec<u8>, NetworkError> {
        let mut builder = self
            .client
            .get(&request.url)
            .query(&request.query)
            .timeout(self.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl HttpFetcher for SourceClient {
    async fn fetch(&self, request: &SourceRequest) -> Result<Vec<u8>, NetworkError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            info!(
                "GET {} (attempt {}/{})",
                request.url, attempt, max_attempts
            );

            match self.fetch_once(request).await {
                Ok(body) => {
                    info!("GET {} returned {} bytes", request.url, body.len());
                    return Ok(body);
                }
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        "GET {} failed (attempt {}/{}): {}; retrying in {:?}",
                        request.url, attempt, max_attempts, e, self.retry.delay
                    );
                    tokio::time::sleep(self.retry.delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(
                        "GET {} failed (attempt {}/{}): {}",
                        request.url, attempt, max_attempts, e
                    );
                    return Err(e);
                }
            }
        }
    }
}
