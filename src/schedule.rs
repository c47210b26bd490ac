//! Draw calendar
//!
//! Works out the next scheduled draw for each game and rewrites the newest
//! record of a freshly fetched payload to describe it: the date becomes the
//! upcoming draw date and a numeric period is advanced by one.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc,
    Weekday,
};
use tracing::{debug, warn};

use crate::models::{DrawRecord, GameType};

/// Draws happen at 21:15 local time; from that minute on, today's draw is
/// considered done.
pub const DRAW_CUTOFF_HOUR: u32 = 21;
pub const DRAW_CUTOFF_MINUTE: u32 = 15;

/// Six-plus-one draw days.
pub const SIX_PLUS_ONE_DRAW_DAYS: [Weekday; 3] = [Weekday::Tue, Weekday::Thu, Weekday::Sun];

/// Converts wall-clock instants to the draw calendar's local time.
#[derive(Debug, Clone, Copy)]
pub struct DrawCalendar {
    offset: FixedOffset,
}

impl DrawCalendar {
    /// Calendar in the zone `offset_hours` east of UTC; out-of-range values
    /// fall back to UTC.
    pub fn new(offset_hours: i32) -> Self {
        let offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!("Invalid draw UTC offset {}h, using UTC", offset_hours);
                Utc.fix()
            });
        Self { offset }
    }

    pub fn local(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.offset).naive_local()
    }
}

impl Default for DrawCalendar {
    fn default() -> Self {
        Self::new(8)
    }
}

fn cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(DRAW_CUTOFF_HOUR, DRAW_CUTOFF_MINUTE, 0).unwrap_or_default()
}

/// Date of the next draw for `game` as seen at local time `now`.
pub fn next_draw_date(game: GameType, now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    let first_candidate = if now.time() >= cutoff() {
        today + Duration::days(1)
    } else {
        today
    };

    match game {
        GameType::ThreeDigit => first_candidate,
        GameType::SixPlusOne => (0..7)
            .map(|offset| first_candidate + Duration::days(offset))
            .find(|date| SIX_PLUS_ONE_DRAW_DAYS.contains(&date.weekday()))
            .unwrap_or(first_candidate),
    }
}

/// Period that follows `period`, keeping zero padding. `None` when the
/// period is not purely numeric.
pub fn next_period(period: &str) -> Option<String> {
    if period.is_empty() || !period.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let next = period.parse::<u64>().ok()?.checked_add(1)?;
    Some(format!("{:0width$}", next, width = period.len()))
}

/// Rewrites the newest record to describe the upcoming draw.
pub fn adjust_newest(
    mut records: Vec<DrawRecord>,
    game: GameType,
    now: NaiveDateTime,
) -> Vec<DrawRecord> {
    let Some(newest) = records.first_mut() else {
        return records;
    };

    let date = next_draw_date(game, now).format("%Y-%m-%d").to_string();
    debug!(
        "Adjusting newest {} record {} ({}) to date {}",
        game,
        newest.period(),
        newest.date(),
        date
    );
    newest.set_date(date);
    if let Some(period) = next_period(newest.period()) {
        newest.set_period(period);
    }

    records
}
