//! JSON API parser
//!
//! Reads `{ <status>: <ok>, <items>: [ {...}, ... ] }` style envelopes. Each
//! item is mapped on its own; an item missing a field is skipped without
//! affecting its neighbours.

use serde_json::{Map, Value};
use tracing::debug;

use super::{digits_only, split_numbers};
use crate::error::ParseError;
use crate::models::{CandidateRecord, GameType};

/// Source-specific item keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFieldMap {
    pub period: String,
    pub date: String,
    /// Three-digit number, or the red balls
    pub primary: String,
    /// Blue ball; unused for the three-digit game
    pub secondary: String,
}

impl Default for JsonFieldMap {
    fn default() -> Self {
        Self {
            period: "code".to_string(),
            date: "date".to_string(),
            primary: "red".to_string(),
            secondary: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonApiParser {
    pub status_field: String,
    pub expected_status: Value,
    pub items_field: String,
    pub fields: JsonFieldMap,
}

impl JsonApiParser {
    /// Envelope used by the welfare lottery draw-notice API:
    /// `{"state": 0, "result": [{"code", "date", "red", "blue"}]}`.
    pub fn cwl() -> Self {
        Self {
            status_field: "state".to_string(),
            expected_status: Value::from(0),
            items_field: "result".to_string(),
            fields: JsonFieldMap::default(),
        }
    }

    pub fn try_parse(
        &self,
        raw: &[u8],
        game: GameType,
    ) -> Result<Vec<CandidateRecord>, ParseError> {
        let root: Value = serde_json::from_slice(raw)?;
        let envelope = root
            .as_object()
            .ok_or_else(|| ParseError::Envelope("top level is not an object".to_string()))?;

        let status = envelope.get(&self.status_field).ok_or_else(|| {
            ParseError::Envelope(format!("missing status field {:?}", self.status_field))
        })?;
        if scalar_text(status) != scalar_text(&self.expected_status) {
            return Err(ParseError::UnexpectedStatus {
                expected: self.expected_status.to_string(),
                found: status.to_string(),
            });
        }

        let items = envelope
            .get(&self.items_field)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ParseError::Envelope(format!("missing items array {:?}", self.items_field))
            })?;

        let mut candidates = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item.as_object().and_then(|obj| self.map_item(obj, game)) {
                Some(candidate) => candidates.push(candidate),
                None => debug!("Skipping {} item {}: missing fields", game, index),
            }
        }

        Ok(candidates)
    }

    fn map_item(&self, item: &Map<String, Value>, game: GameType) -> Option<CandidateRecord> {
        let period = item.get(&self.fields.period).and_then(scalar_text)?;
        let date = item.get(&self.fields.date).and_then(scalar_text)?;
        let primary = item.get(&self.fields.primary)?;

        match game {
            GameType::ThreeDigit => Some(CandidateRecord::ThreeDigit {
                period,
                date,
                number: digits_only(&flatten(primary)?.join("")),
            }),
            GameType::SixPlusOne => {
                let blue = item.get(&self.fields.secondary).and_then(scalar_text)?;
                let red_balls = flatten(primary)?
                    .iter()
                    .flat_map(|part| split_numbers(part))
                    .collect();
                Some(CandidateRecord::SixPlusOne {
                    period,
                    date,
                    red_balls,
                    blue_ball: digits_only(&blue),
                })
            }
        }
    }
}

/// String or number as trimmed text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A scalar, or an array of scalars, as a list of text pieces.
fn flatten(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items.iter().map(scalar_text).collect(),
        other => scalar_text(other).map(|s| vec![s]),
    }
}
