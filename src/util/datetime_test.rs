use chrono::{FixedOffset, LocalResult, Utc};

use super::*;

fn plus_three() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

// =============================================================
// format_date / format_time in a fixed zone
// =============================================================

#[test]
fn format_date_zero_pads_day_and_month() {
    assert_eq!(format_date_in("2024-03-05T08:30:00Z", &Utc), "05.03.2024");
}

#[test]
fn format_time_zero_pads_hours_and_minutes() {
    assert_eq!(format_time_in("2024-03-05T08:05:00Z", &Utc), "08:05");
}

#[test]
fn offset_input_is_converted_to_viewer_zone() {
    assert_eq!(format_time_in("2024-03-05T22:30:00Z", &plus_three()), "01:30");
    assert_eq!(format_date_in("2024-03-05T22:30:00Z", &plus_three()), "06.03.2024");
}

#[test]
fn offset_less_input_is_taken_as_local_time() {
    assert_eq!(format_time_in("2024-03-05T08:30:00", &plus_three()), "08:30");
}

#[test]
fn space_separator_and_fraction_are_accepted() {
    assert_eq!(format_date_time_in("2024-12-31 23:59:59.123456", &Utc), "31.12.2024 23:59");
}

#[test]
fn minutes_without_seconds_are_accepted() {
    assert_eq!(format_time_in("2024-03-05T07:45", &Utc), "07:45");
}

#[test]
fn date_only_input_is_utc_midnight() {
    assert_eq!(format_date_time_in("2024-03-05", &Utc), "05.03.2024 00:00");
    assert_eq!(format_date_time_in("2024-03-05", &plus_three()), "05.03.2024 03:00");
}

#[test]
fn date_time_is_date_then_time() {
    for input in [
        "2024-03-05T08:30:00Z",
        "2023-01-01T00:00:00+05:00",
        "2024-02-29 12:01:02",
        "2024-07-14",
    ] {
        let tz = plus_three();
        assert_eq!(
            format_date_time_in(input, &tz),
            format!("{} {}", format_date_in(input, &tz), format_time_in(input, &tz)),
            "input {input}"
        );
    }
}

// =============================================================
// DST transitions
// =============================================================

/// +01:00 until 2024-03-31 01:00 UTC, +02:00 after. Local 02:00 to 03:00
/// does not exist that night.
#[derive(Clone, Copy, Debug)]
struct SpringForward;

fn hour(h: i32) -> FixedOffset {
    FixedOffset::east_opt(h * 3600).unwrap()
}

fn switch_at_utc() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(1, 0, 0).unwrap()
}

impl TimeZone for SpringForward {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
        SpringForward
    }

    fn offset_from_local_date(&self, _: &NaiveDate) -> LocalResult<FixedOffset> {
        LocalResult::Single(hour(1))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let gap_start = switch_at_utc() + TimeDelta::hours(1);
        let gap_end = switch_at_utc() + TimeDelta::hours(2);
        if *local < gap_start {
            LocalResult::Single(hour(1))
        } else if *local >= gap_end {
            LocalResult::Single(hour(2))
        } else {
            LocalResult::None
        }
    }

    fn offset_from_utc_date(&self, _: &NaiveDate) -> FixedOffset {
        hour(1)
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < switch_at_utc() { hour(1) } else { hour(2) }
    }
}

#[test]
fn skipped_local_time_moves_forward_by_the_gap() {
    assert_eq!(format_date_time_in("2024-03-31T02:30:00", &SpringForward), "31.03.2024 03:30");
    assert_eq!(format_time_in("2024-03-31 02:00", &SpringForward), "03:00");
}

#[test]
fn times_around_the_gap_are_unchanged() {
    assert_eq!(format_time_in("2024-03-31T01:59", &SpringForward), "01:59");
    assert_eq!(format_time_in("2024-03-31T03:00", &SpringForward), "03:00");
}

#[test]
fn skipped_local_time_parses_to_the_pre_change_instant() {
    let dt = parse_timestamp_in("2024-03-31T02:30:00", &SpringForward).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(1, 30, 0).unwrap();
    assert_eq!(dt.naive_utc(), expected);
}

// =============================================================
// Malformed input
// =============================================================

#[test]
fn malformed_input_renders_invalid_date() {
    assert_eq!(format_date_in("yesterday", &Utc), INVALID_DATE);
    assert_eq!(format_time_in("", &Utc), INVALID_DATE);
    assert_eq!(format_date_time_in("2024-13-40", &Utc), INVALID_DATE);
}

#[test]
fn parse_reports_original_input() {
    let err = parse_timestamp_in("nope", &Utc).unwrap_err();
    assert_eq!(err, DateError::Invalid("nope".to_owned()));
}

#[test]
fn local_zone_helpers_agree_with_property() {
    let input = "2024-03-05T08:30:00Z";
    assert_eq!(
        format_date_time(input),
        format!("{} {}", format_date(input), format_time(input))
    );
    assert!(parse_timestamp(input).is_ok());
}
