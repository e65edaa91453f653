//! Date and time rendering for ISO-8601 timestamps from the backend.
//!
//! Output is always in the viewer's local zone: `DD.MM.YYYY` and `HH:MM`.
//! Accepted inputs follow what browsers' `Date` parses:
//!
//! - RFC 3339 with `Z` or an offset, converted to local time
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` without offset, taken as local time; a
//!   time skipped by a DST change is read with the offset from before it
//! - the same with a space instead of `T`
//! - `YYYY-MM-DD` alone, taken as UTC midnight
//!
//! Anything else renders as [`INVALID_DATE`].

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// Rendering used for input that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid date: {0:?}")]
    Invalid(String),
    /// Local wall-clock time that cannot be placed on the timeline.
    #[error("nonexistent local time: {0:?}")]
    Nonexistent(String),
}

/// Parse `input` into the viewer's local zone.
///
/// # Errors
///
/// See [`parse_timestamp_in`].
pub fn parse_timestamp(input: &str) -> Result<DateTime<Local>, DateError> {
    parse_timestamp_in(input, &Local)
}

/// Parse `input` into `tz`.
///
/// # Errors
///
/// Returns [`DateError::Invalid`] when no accepted form matches and
/// [`DateError::Nonexistent`] when an offset-less time is out of range.
pub fn parse_timestamp_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, DateError> {
    let normalized = input.trim().replacen(' ', "T", 1);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(tz));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return resolve_local(&naive, tz).ok_or_else(|| DateError::Nonexistent(input.to_owned()));
        }
    }

    let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map_err(|_| DateError::Invalid(input.to_owned()))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().with_timezone(tz))
        .ok_or_else(|| DateError::Invalid(input.to_owned()))
}

/// Place a wall-clock time in `tz`. Ambiguous times take the earlier
/// instant. Skipped times use the offset in force a day before.
fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(naive).earliest() {
        return Some(dt);
    }
    let before = naive.checked_sub_signed(TimeDelta::days(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}

fn render_in<Tz>(input: &str, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp_in(input, tz) {
        Ok(dt) => dt.format(pattern).to_string(),
        Err(err) => {
            log::debug!("{err}");
            INVALID_DATE.to_owned()
        }
    }
}

/// `DD.MM.YYYY` in the local zone.
#[must_use]
pub fn format_date(input: &str) -> String {
    format_date_in(input, &Local)
}

/// `HH:MM` in the local zone.
#[must_use]
pub fn format_time(input: &str) -> String {
    format_time_in(input, &Local)
}

/// `DD.MM.YYYY HH:MM` in the local zone.
#[must_use]
pub fn format_date_time(input: &str) -> String {
    format_date_time_in(input, &Local)
}

#[must_use]
pub fn format_date_in<Tz>(input: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render_in(input, tz, "%d.%m.%Y")
}

#[must_use]
pub fn format_time_in<Tz>(input: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render_in(input, tz, "%H:%M")
}

#[must_use]
pub fn format_date_time_in<Tz>(input: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render_in(input, tz, "%d.%m.%Y %H:%M")
}
