//! Synthetic draw generator.
//!
//! Placeholder data for when every real source is down and the operator
//! has opted in with `SYNTHETIC_FALLBACK=true`. The weights are fixed and
//! carry no statistical meaning. Payloads are labelled `synthetic`.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::Rng;

use super::DrawSource;
use crate::error::SourceError;
use crate::models::{CandidateRecord, DrawRecord, GameType, MAX_LIMIT};
use crate::validator::{validate_all, BLUE_BALL_MAX, RED_BALL_COUNT, RED_BALL_MAX};

pub const SYNTHETIC_SOURCE_NAME: &str = "synthetic";

/// Relative weight of each digit 0-9.
const DIGIT_WEIGHTS: [f64; 10] = [
    0.105, 0.108, 0.102, 0.095, 0.098, 0.100, 0.102, 0.105, 0.108, 0.107,
];

pub struct SyntheticSource {
    game: GameType,
    count: usize,
}

impl SyntheticSource {
    pub fn new(game: GameType) -> Self {
        Self {
            game,
            count: MAX_LIMIT,
        }
    }

    pub fn with_count(game: GameType, count: usize) -> Self {
        Self { game, count }
    }
}

#[async_trait]
impl DrawSource for SyntheticSource {
    fn name(&self) -> &str {
        SYNTHETIC_SOURCE_NAME
    }

    fn game(&self) -> GameType {
        self.game
    }

    async fn load(&self) -> Result<Vec<DrawRecord>, SourceError> {
        let today = Utc::now().date_naive();
        let candidates = generate(&mut rand::thread_rng(), self.game, self.count, today);
        let candidate_count = candidates.len();

        let records = validate_all(candidates, self.game);
        if records.is_empty() {
            return Err(SourceError::NoRecords {
                candidates: candidate_count,
            });
        }
        Ok(records)
    }
}

/// Builds `count` candidates counting back one day and one period at a time
/// from `today`.
pub(crate) fn generate<R: Rng>(
    rng: &mut R,
    game: GameType,
    count: usize,
    today: NaiveDate,
) -> Vec<CandidateRecord> {
    let count = count.min(MAX_LIMIT);
    // <year>1000 counting down keeps every period the same width
    let first_period = i64::from(today.year()) * 10_000 + MAX_LIMIT as i64;

    (0..count)
        .map(|i| {
            let period = (first_period - i as i64).to_string();
            let date = (today - Duration::days(i as i64))
                .format("%Y-%m-%d")
                .to_string();

            match game {
                GameType::ThreeDigit => CandidateRecord::ThreeDigit {
                    period,
                    date,
                    number: weighted_number(rng),
                },
                GameType::SixPlusOne => {
                    let (red_balls, blue_ball) = random_balls(rng);
                    CandidateRecord::SixPlusOne {
                        period,
                        date,
                        red_balls: red_balls.iter().map(|n| format!("{:02}", n)).collect(),
                        blue_ball: blue_ball.to_string(),
                    }
                }
            }
        })
        .collect()
}

fn weighted_digit<R: Rng>(rng: &mut R) -> u8 {
    let total: f64 = DIGIT_WEIGHTS.iter().sum();
    let roll = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (digit, weight) in DIGIT_WEIGHTS.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return digit as u8;
        }
    }
    9
}

/// Three weighted digits, never all identical.
fn weighted_number<R: Rng>(rng: &mut R) -> String {
    let mut digits = [weighted_digit(rng), weighted_digit(rng), weighted_digit(rng)];
    while digits[0] == digits[1] && digits[1] == digits[2] {
        digits[2] = rng.gen_range(0..=9);
    }
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

fn random_balls<R: Rng>(rng: &mut R) -> (Vec<u8>, u8) {
    let mut reds = rand::seq::index::sample(rng, RED_BALL_MAX as usize, RED_BALL_COUNT)
        .into_iter()
        .map(|i| i as u8 + 1)
        .collect::<Vec<u8>>();
    reds.sort_unstable();
    let blue = rng.gen_range(1..=BLUE_BALL_MAX);
    (reds, blue)
}
