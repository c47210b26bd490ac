//! HTTP-backed draw source: fetch, parse, validate.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{DrawSource, HttpFetcher, RecordParser, SourceRequest};
use crate::error::SourceError;
use crate::models::{DrawRecord, GameType};
use crate::validator::validate_all;

pub struct SourceAdapter {
    name: String,
    game: GameType,
    request: SourceRequest,
    fetcher: Arc<dyn HttpFetcher>,
    parser: RecordParser,
}

impl SourceAdapter {
    pub fn new(
        name: impl Into<String>,
        game: GameType,
        request: SourceRequest,
        fetcher: Arc<dyn HttpFetcher>,
        parser: RecordParser,
    ) -> Self {
        Self {
            name: name.into(),
            game,
            request,
            fetcher,
            parser,
        }
    }

    pub fn request(&self) -> &SourceRequest {
        &self.request
    }
}

#[async_trait]
impl DrawSource for SourceAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn game(&self) -> GameType {
        self.game
    }

    async fn load(&self) -> Result<Vec<DrawRecord>, SourceError> {
        let raw = self.fetcher.fetch(&self.request).await?;

        let candidates = self.parser.parse(&raw, self.game);
        let candidate_count = candidates.len();
        let records = validate_all(candidates, self.game);

        info!(
            "Source {} kept {}/{} {} records",
            self.name,
            records.len(),
            candidate_count,
            self.game
        );

        if records.is_empty() {
            return Err(SourceError::NoRecords {
                candidates: candidate_count,
            });
        }
        Ok(records)
    }
}
