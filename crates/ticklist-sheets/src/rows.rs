//! Effective-date, date-key, and row/column resolution.
//!
//! The spreadsheet is keyed by date: column A holds one `M/D/YYYY`
//! string per row. A completion that happens in the small hours still
//! belongs to the previous day's row, so "today" rolls back before a
//! cutoff hour.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use ticklist_core::{Error, Result};

/// Completions before this hour count toward the previous day.
pub const DEFAULT_CUTOFF_HOUR: u32 = 6;

/// The calendar date a completion at `now` belongs to.
///
/// Strictly before `cutoff_hour` the previous date is used, so a
/// nightly checklist finished at 1am lands on the evening it started.
pub fn effective_date(now: NaiveDateTime, cutoff_hour: u32) -> NaiveDate {
    if now.hour() < cutoff_hour {
        now.date().pred_opt().unwrap_or_else(|| now.date())
    } else {
        now.date()
    }
}

/// Render a date the way the spreadsheet keys its rows: `M/D/YYYY`
/// with no zero padding.
pub fn date_key(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Find the 1-based row whose column-A value equals `key`.
///
/// The first exact match wins. A miss means the sheet has no row for
/// the effective date; that is surfaced to the caller, never retried.
pub fn find_row(key: &str, column_a_values: &[String]) -> Result<u32> {
    column_a_values
        .iter()
        .position(|value| value == key)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| Error::RowNotFound {
            date_key: key.to_string(),
        })
}

/// Spreadsheet letter for a 1-based column number.
///
/// Single-letter alphabet only; the column map keeps every target
/// within A–Z.
pub fn column_letter(column_number: u32) -> char {
    let index = column_number.clamp(1, 26) - 1;
    (b'A' + index as u8) as char
}
