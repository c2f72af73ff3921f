//! Publication dates as scraped from book pages.
//!
//! The page shows either a full date (`First published January 1, 2024`) or
//! something that only ends in a year. Only the date part is kept.

use crate::error::SummaryError;
use chrono::NaiveDate;
use tracing::debug;

const FULL_DATE_FORMAT: &str = "%B %d, %Y";
const PUBLISHED_MARKER: &str = "First published ";

/// Parse a publication string into a date.
///
/// Tries `Month D, YYYY` first. Failing that, the last four characters are
/// read as a year and January 1 of that year is returned.
pub fn parse_publication_date(input: &str) -> Result<NaiveDate, SummaryError> {
    let text = input.trim();
    let text = text.strip_prefix(PUBLISHED_MARKER).unwrap_or(text);

    if let Ok(date) = NaiveDate::parse_from_str(text, FULL_DATE_FORMAT) {
        return Ok(date);
    }

    let year = text
        .char_indices()
        .rev()
        .nth(3)
        .map(|(i, _)| &text[i..])
        .filter(|tail| tail.chars().all(|c| c.is_ascii_digit()))
        .and_then(|tail| tail.parse::<i32>().ok())
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));

    match year {
        Some(date) => {
            debug!("Only the year of '{}' was parsed: {}", input, date.format("%Y"));
            Ok(date)
        }
        None => Err(SummaryError::UnparseableDate {
            input: input.to_string(),
        }),
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
