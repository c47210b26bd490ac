//! HTML table parser
//!
//! Tries an ordered list of table selectors and commits to the first one
//! whose table yields at least one structurally valid row. Rows are read
//! positionally: period, date, then the value column(s).

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::{digits_only, split_numbers};
use crate::error::ParseError;
use crate::models::{CandidateRecord, GameType};

/// Identifier, class names, then any table.
pub const DEFAULT_TABLE_SELECTORS: [&str; 5] = [
    "table#tdata",
    "table.tb_0",
    "table.history-table",
    "table[class*=\"table\"]",
    "table",
];

#[derive(Debug, Clone)]
pub struct HtmlTableParser {
    pub selectors: Vec<String>,
}

impl Default for HtmlTableParser {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SELECTORS.iter().map(|s| s.to_string()).collect())
    }
}

impl HtmlTableParser {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    pub fn try_parse(
        &self,
        raw: &[u8],
        game: GameType,
    ) -> Result<Vec<CandidateRecord>, ParseError> {
        // Digits are ASCII in every encoding the sources use, so a lossy
        // decode of a GB2312 page keeps everything we read.
        let html = String::from_utf8_lossy(raw);
        let document = Html::parse_document(&html);

        let row_selector = Selector::parse("tr").map_err(|e| ParseError::Envelope(e.to_string()))?;
        let cell_selector =
            Selector::parse("td, th").map_err(|e| ParseError::Envelope(e.to_string()))?;

        for raw_selector in &self.selectors {
            let table_selector = match Selector::parse(raw_selector) {
                Ok(selector) => selector,
                Err(e) => {
                    warn!("Ignoring invalid table selector {:?}: {}", raw_selector, e);
                    continue;
                }
            };

            let Some(table) = document.select(&table_selector).next() else {
                continue;
            };

            let candidates: Vec<CandidateRecord> = table
                .select(&row_selector)
                .skip(1)
                .filter_map(|row| {
                    let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
                    extract_row(&cells, game)
                })
                .collect();

            if !candidates.is_empty() {
                debug!(
                    "Selector {:?} yielded {} {} rows",
                    raw_selector,
                    candidates.len(),
                    game
                );
                return Ok(candidates);
            }
        }

        Err(ParseError::NoTable)
    }
}

/// Text of a cell with every text node trimmed, joined by `separator`.
fn cell_text(cell: &ElementRef, separator: &str) -> String {
    cell.text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Reads one row; `None` when it lacks the shape of a draw row.
fn extract_row(cells: &[ElementRef], game: GameType) -> Option<CandidateRecord> {
    let needed = match game {
        GameType::ThreeDigit => 3,
        GameType::SixPlusOne => 4,
    };
    if cells.len() < needed {
        return None;
    }

    let period = cell_text(&cells[0], "");
    let date = cell_text(&cells[1], "");
    if period.is_empty() || date.is_empty() {
        return None;
    }

    match game {
        GameType::ThreeDigit => {
            let number = digits_only(&cell_text(&cells[2], ""));
            (number.len() == 3).then_some(CandidateRecord::ThreeDigit {
                period,
                date,
                number,
            })
        }
        GameType::SixPlusOne => {
            // Balls are often one <span> each, so keep node boundaries as separators
            let red_balls = split_numbers(&cell_text(&cells[2], ","));
            let blue_ball = digits_only(&cell_text(&cells[3], ""));
            (red_balls.len() == 6 && !blue_ball.is_empty()).then_some(
                CandidateRecord::SixPlusOne {
                    period,
                    date,
                    red_balls,
                    blue_ball,
                },
            )
        }
    }
}
