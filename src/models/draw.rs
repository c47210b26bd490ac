//! Draw record models
//!
//! Canonical, validated draw records for both games plus the loose
//! candidate shape parsers hand to the validator.

use std::fmt;

use serde::Serialize;

// == Game Type ==
/// The two supported lottery games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    /// Daily draw of three independent digits
    ThreeDigit,
    /// Six distinct reds from 1..=33 plus one blue from 1..=16
    SixPlusOne,
}

impl GameType {
    pub const ALL: [GameType; 2] = [GameType::ThreeDigit, GameType::SixPlusOne];

    /// Route segment and log label.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::ThreeDigit => "three-digit",
            GameType::SixPlusOne => "six-plus-one",
        }
    }

    /// Name upstream sources use for the game.
    pub fn upstream_code(&self) -> &'static str {
        match self {
            GameType::ThreeDigit => "fc3d",
            GameType::SixPlusOne => "ssq",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Candidate Record ==
/// Unvalidated fields extracted by a parser. Values are already cleaned of
/// non-digit noise but not yet range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRecord {
    ThreeDigit {
        period: String,
        date: String,
        number: String,
    },
    SixPlusOne {
        period: String,
        date: String,
        red_balls: Vec<String>,
        blue_ball: String,
    },
}

impl CandidateRecord {
    pub fn game(&self) -> GameType {
        match self {
            CandidateRecord::ThreeDigit { .. } => GameType::ThreeDigit,
            CandidateRecord::SixPlusOne { .. } => GameType::SixPlusOne,
        }
    }
}

// == Three Digit Draw ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDigitDraw {
    pub period: String,
    pub date: String,
    /// Exactly three ASCII digits
    pub number: String,
    pub sum: u8,
    pub span: u8,
    pub odd_count: u8,
    pub even_count: u8,
    pub big_count: u8,
    pub small_count: u8,
}

// == Six Plus One Draw ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SixPlusOneDraw {
    pub period: String,
    pub date: String,
    /// Six distinct values in 1..=33, ascending
    pub red_balls: Vec<u8>,
    pub blue_ball: u8,
    pub red_sum: u16,
    pub red_odd_count: u8,
    pub red_even_count: u8,
    pub red_big_count: u8,
    pub red_small_count: u8,
}

// == Draw Record ==
/// A canonical record of either game, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DrawRecord {
    ThreeDigit(ThreeDigitDraw),
    SixPlusOne(SixPlusOneDraw),
}

impl DrawRecord {
    pub fn game(&self) -> GameType {
        match self {
            DrawRecord::ThreeDigit(_) => GameType::ThreeDigit,
            DrawRecord::SixPlusOne(_) => GameType::SixPlusOne,
        }
    }

    pub fn period(&self) -> &str {
        match self {
            DrawRecord::ThreeDigit(d) => &d.period,
            DrawRecord::SixPlusOne(d) => &d.period,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            DrawRecord::ThreeDigit(d) => &d.date,
            DrawRecord::SixPlusOne(d) => &d.date,
        }
    }

    pub fn set_period(&mut self, period: String) {
        match self {
            DrawRecord::ThreeDigit(d) => d.period = period,
            DrawRecord::SixPlusOne(d) => d.period = period,
        }
    }

    pub fn set_date(&mut self, date: String) {
        match self {
            DrawRecord::ThreeDigit(d) => d.date = date,
            DrawRecord::SixPlusOne(d) => d.date = date,
        }
    }
}

// == Draw Payload ==
/// Records plus the name of the source that produced them, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPayload {
    pub records: Vec<DrawRecord>,
    pub source: String,
}

impl DrawPayload {
    pub fn new(records: Vec<DrawRecord>, source: impl Into<String>) -> Self {
        Self {
            records,
            source: source.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_labels() {
        assert_eq!(GameType::ThreeDigit.to_string(), "three-digit");
        assert_eq!(GameType::SixPlusOne.upstream_code(), "ssq");
    }

    #[test]
    fn test_three_digit_serializes_camel_case() {
        let draw = DrawRecord::ThreeDigit(ThreeDigitDraw {
            period: "2024100".into(),
            date: "2024-04-15".into(),
            number: "582".into(),
            sum: 15,
            span: 6,
            odd_count: 1,
            even_count: 2,
            big_count: 2,
            small_count: 1,
        });
        let json = serde_json::to_value(&draw).unwrap();
        assert_eq!(json["number"], "582");
        assert_eq!(json["oddCount"], 1);
        assert_eq!(json["smallCount"], 1);
        assert!(json.get("ThreeDigit").is_none());
    }

    #[test]
    fn test_set_period_and_date() {
        let mut draw = DrawRecord::SixPlusOne(SixPlusOneDraw {
            period: "2024050".into(),
            date: "2024-05-02".into(),
            red_balls: vec![1, 2, 3, 4, 5, 6],
            blue_ball: 9,
            red_sum: 21,
            red_odd_count: 3,
            red_even_count: 3,
            red_big_count: 0,
            red_small_count: 6,
        });
        draw.set_period("2024051".into());
        draw.set_date("2024-05-05".into());
        assert_eq!(draw.period(), "2024051");
        assert_eq!(draw.date(), "2024-05-05");
        assert_eq!(draw.game(), GameType::SixPlusOne);
    }
}
