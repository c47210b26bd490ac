//! Draw sources
//!
//! A source produces validated draw records for one game. Real sources are
//! `SourceAdapter`s (fetch + parse + validate over HTTP); the synthetic
//! generator is an optional last resort.

mod adapter;
mod client;
pub mod parser;
pub mod registry;
mod synthetic;

pub use adapter::SourceAdapter;
pub use client::{HttpFetcher, RetryPolicy, SourceClient, SourceRequest};
pub use parser::{HtmlTableParser, JsonApiParser, RecordParser};
pub use synthetic::{SyntheticSource, SYNTHETIC_SOURCE_NAME};

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{DrawRecord, GameType};

/// One entry of a fallback chain.
#[async_trait]
pub trait DrawSource: Send + Sync {
    /// Name reported to API callers as the payload origin
    fn name(&self) -> &str;

    /// Game this source serves
    fn game(&self) -> GameType;

    /// Produces validated records, newest first. An empty list is reported
    /// as `SourceError::NoRecords` rather than `Ok`.
    async fn load(&self) -> Result<Vec<DrawRecord>, SourceError>;
}
