//! Record parsers
//!
//! Turn a raw upstream body into candidate records for one game. Parsers
//! never fail outward: malformed input is logged and yields an empty list,
//! which the fallback chain treats the same as "no data".

mod html_table;
mod json_api;

pub use html_table::{HtmlTableParser, DEFAULT_TABLE_SELECTORS};
pub use json_api::{JsonApiParser, JsonFieldMap};

use tracing::{debug, warn};

use crate::models::{CandidateRecord, GameType};

/// The two parser capabilities a source can be configured with.
#[derive(Debug, Clone)]
pub enum RecordParser {
    JsonApi(JsonApiParser),
    HtmlTable(HtmlTableParser),
}

impl RecordParser {
    pub fn kind(&self) -> &'static str {
        match self {
            RecordParser::JsonApi(_) => "json-api",
            RecordParser::HtmlTable(_) => "html-table",
        }
    }

    /// Parses `raw` into candidates for `game`; empty on any malformation.
    pub fn parse(&self, raw: &[u8], game: GameType) -> Vec<CandidateRecord> {
        let result = match self {
            RecordParser::JsonApi(parser) => parser.try_parse(raw, game),
            RecordParser::HtmlTable(parser) => parser.try_parse(raw, game),
        };

        match result {
            Ok(candidates) => {
                debug!(
                    "{} parser produced {} {} candidates",
                    self.kind(),
                    candidates.len(),
                    game
                );
                candidates
            }
            Err(e) => {
                warn!("{} parser found no {} data: {}", self.kind(), game, e);
                Vec::new()
            }
        }
    }
}

// == Cleaning Helpers ==

/// Keeps only ASCII digits.
pub(crate) fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Splits on every run of non-digit characters, so `"01,05 12"` and
/// `"01, 05, 12"` both give `["01", "05", "12"]`.
pub(crate) fn split_numbers(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
