//! Record validation and enrichment
//!
//! Checks a candidate against the canonical invariants of its game and, if
//! it passes, computes the derived statistics. A rejected candidate costs
//! only itself.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{CandidateRecord, DrawRecord, GameType, SixPlusOneDraw, ThreeDigitDraw};

/// Digits at or above this count as "big" in the three-digit game.
pub const DIGIT_BIG_THRESHOLD: u8 = 5;
/// Red balls above this count as "big" (midpoint of 1..=33).
pub const RED_BIG_THRESHOLD: u8 = 16;

pub const RED_BALL_MAX: u8 = 33;
pub const BLUE_BALL_MAX: u8 = 16;
pub const RED_BALL_COUNT: usize = 6;

/// Validates one candidate for `game`.
pub fn validate(candidate: CandidateRecord, game: GameType) -> Result<DrawRecord, ValidationError> {
    if candidate.game() != game {
        return Err(ValidationError::WrongGame(game.to_string()));
    }

    match candidate {
        CandidateRecord::ThreeDigit {
            period,
            date,
            number,
        } => validate_three_digit(period, date, number).map(DrawRecord::ThreeDigit),
        CandidateRecord::SixPlusOne {
            period,
            date,
            red_balls,
            blue_ball,
        } => validate_six_plus_one(period, date, &red_balls, &blue_ball)
            .map(DrawRecord::SixPlusOne),
    }
}

/// Validates a batch, keeping input order and dropping rejects.
pub fn validate_all(candidates: Vec<CandidateRecord>, game: GameType) -> Vec<DrawRecord> {
    candidates
        .into_iter()
        .filter_map(|candidate| match validate(candidate, game) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Dropping {} record: {}", game, e);
                None
            }
        })
        .collect()
}

fn check_period(period: String) -> Result<String, ValidationError> {
    let period = period.trim().to_string();
    if period.is_empty() {
        Err(ValidationError::EmptyPeriod)
    } else {
        Ok(period)
    }
}

/// Keeps a leading `YYYY-MM-DD` and drops decorations such as a weekday
/// suffix; anything else is returned trimmed.
fn normalize_date(date: &str) -> String {
    let date = date.trim();
    date.get(..10)
        .filter(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok())
        .unwrap_or(date)
        .to_string()
}

fn validate_three_digit(
    period: String,
    date: String,
    number: String,
) -> Result<ThreeDigitDraw, ValidationError> {
    let period = check_period(period)?;

    if number.len() != 3 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::BadNumber(number));
    }

    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    let max = digits.iter().copied().max().unwrap_or(0);
    let min = digits.iter().copied().min().unwrap_or(0);
    let odd_count = digits.iter().filter(|d| *d % 2 == 1).count() as u8;
    let big_count = digits.iter().filter(|d| **d >= DIGIT_BIG_THRESHOLD).count() as u8;

    Ok(ThreeDigitDraw {
        period,
        date: normalize_date(&date),
        sum: digits.iter().sum(),
        span: max - min,
        odd_count,
        even_count: 3 - odd_count,
        big_count,
        small_count: 3 - big_count,
        number,
    })
}

fn parse_ball(text: &str, max: u8) -> Option<u8> {
    text.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=max).contains(n))
}

fn validate_six_plus_one(
    period: String,
    date: String,
    red_balls: &[String],
    blue_ball: &str,
) -> Result<SixPlusOneDraw, ValidationError> {
    let period = check_period(period)?;

    if red_balls.len() != RED_BALL_COUNT {
        return Err(ValidationError::RedBallCount(red_balls.len()));
    }

    let mut reds = red_balls
        .iter()
        .map(|text| {
            parse_ball(text, RED_BALL_MAX).ok_or_else(|| ValidationError::RedBallRange(text.clone()))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    reds.sort_unstable();
    if reds.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(ValidationError::DuplicateRedBall);
    }

    let blue = parse_ball(blue_ball, BLUE_BALL_MAX)
        .ok_or_else(|| ValidationError::BlueBallRange(blue_ball.to_string()))?;

    let red_odd_count = reds.iter().filter(|n| *n % 2 == 1).count() as u8;
    let red_big_count = reds.iter().filter(|n| **n > RED_BIG_THRESHOLD).count() as u8;

    Ok(SixPlusOneDraw {
        period,
        date: normalize_date(&date),
        red_sum: reds.iter().map(|n| u16::from(*n)).sum(),
        red_odd_count,
        red_even_count: RED_BALL_COUNT as u8 - red_odd_count,
        red_big_count,
        red_small_count: RED_BALL_COUNT as u8 - red_big_count,
        red_balls: reds,
        blue_ball: blue,
    })
}
