//! Fallback orchestration
//!
//! Each game has a priority-ordered chain of sources. Sources are tried one
//! at a time; the first that yields records wins and nothing after it runs.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{DrawPayload, GameType};
use crate::sources::DrawSource;

#[derive(Default)]
pub struct FallbackOrchestrator {
    chains: HashMap<GameType, Vec<Arc<dyn DrawSource>>>,
}

impl FallbackOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `source` to the chain of the game it serves.
    pub fn register(&mut self, source: Arc<dyn DrawSource>) {
        self.chains.entry(source.game()).or_default().push(source);
    }

    pub fn with_source(mut self, source: Arc<dyn DrawSource>) -> Self {
        self.register(source);
        self
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Arc<dyn DrawSource>>) -> Self {
        for source in sources {
            self.register(source);
        }
        self
    }

    /// Names in the chain for `game`, in the order they are tried.
    pub fn source_names(&self, game: GameType) -> Vec<&str> {
        self.chains
            .get(&game)
            .map(|chain| chain.iter().map(|s| s.name()).collect())
            .unwrap_or_default()
    }

    /// Returns at most `limit` records from the first productive source.
    ///
    /// An exhausted chain yields an empty payload; callers decide how to
    /// report it.
    pub async fn fetch_draws(&self, game: GameType, limit: usize) -> DrawPayload {
        let chain = self.chains.get(&game).map(Vec::as_slice).unwrap_or_default();

        for (position, source) in chain.iter().enumerate() {
            info!(
                "Trying {} source {} ({}/{})",
                game,
                source.name(),
                position + 1,
                chain.len()
            );

            match source.load().await {
                Ok(mut records) if !records.is_empty() => {
                    let available = records.len();
                    records.truncate(limit);
                    info!(
                        "Source {} served {} of {} {} records",
                        source.name(),
                        records.len(),
                        available,
                        game
                    );
                    return DrawPayload::new(records, source.name());
                }
                Ok(_) => warn!("Source {} returned no {} records", source.name(), game),
                Err(e) => warn!("Source {} failed for {}: {}", source.name(), game, e),
            }
        }

        warn!("All {} {} sources exhausted", chain.len(), game);
        DrawPayload::new(Vec::new(), "")
    }
}
