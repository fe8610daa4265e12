//! Temporal helpers for feed formatting and calendar arithmetic
//!
//! The external feed exchanges local timestamps without a timezone
//! suffix, so everything here works on naive date-times. Day counts are
//! inclusive of both endpoints, matching how policy validity windows are
//! quoted to the insurer.

use chrono::{Months, NaiveDateTime};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date arithmetic overflow adding {months} months to {start}")]
    ArithmeticOverflow {
        start: NaiveDateTime,
        months: u32,
    },
}

/// Formats a timestamp the way the feed expects it
///
/// ISO-8601 local date-time with no timezone suffix, e.g.
/// `2018-05-05T05:05:05`.
pub fn feed_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Inclusive day count between two timestamps
///
/// Both endpoints count, so a window from a date to the same date is one
/// day long. Callers are expected to pass `from <= to`.
pub fn inclusive_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_days() + 1
}

/// Adds whole calendar months, preserving the day of month
///
/// Days past the end of the target month clamp to its last day
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(start: NaiveDateTime, months: u32) -> Result<NaiveDateTime, TemporalError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or(TemporalError::ArithmeticOverflow { start, months })
}
