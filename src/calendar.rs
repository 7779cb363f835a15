//! Day-level calendar primitives on top of chrono.
//!
//! Everything here works on wall-clock values; no timezone conversion is
//! ever applied.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Midnight at the beginning of `date`.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first Monday-Friday date strictly after `date`.
///
/// Returns `None` only when the calendar runs out of dates.
pub fn next_weekday(date: NaiveDate) -> Option<NaiveDate> {
    let mut next = date.succ_opt()?;
    while is_weekend(next) {
        next = next.succ_opt()?;
    }
    Some(next)
}

/// Parse an instant given on the command line.
///
/// RFC 3339 values keep their local wall-clock time (the offset is dropped,
/// not applied). Offset-less values are accepted with or without seconds.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    for format in &formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive);
        }
    }

    anyhow::bail!("Failed to parse datetime: {}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_weekday_skips_weekend() {
        // Fri Jan 9 2026 -> Mon Jan 12
        assert_eq!(next_weekday(date(2026, 1, 9)), Some(date(2026, 1, 12)));
        assert_eq!(next_weekday(date(2026, 1, 10)), Some(date(2026, 1, 12)));
        assert_eq!(next_weekday(date(2026, 1, 11)), Some(date(2026, 1, 12)));
    }

    #[test]
    fn test_next_weekday_midweek() {
        assert_eq!(next_weekday(date(2026, 1, 5)), Some(date(2026, 1, 6)));
        // Across a month boundary
        assert_eq!(next_weekday(date(2026, 1, 30)), Some(date(2026, 2, 2)));
    }

    #[test]
    fn test_next_weekday_overflow() {
        assert_eq!(next_weekday(NaiveDate::MAX), None);
    }

    #[test]
    fn test_midnight() {
        assert_eq!(
            midnight(date(2026, 1, 8)),
            date(2026, 1, 8).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_is_same_day() {
        let morning = date(2026, 1, 8).and_hms_opt(0, 0, 0).unwrap();
        let night = date(2026, 1, 8).and_hms_opt(23, 59, 59).unwrap();
        let next = date(2026, 1, 9).and_hms_opt(0, 0, 0).unwrap();
        assert!(is_same_day(morning, night));
        assert!(!is_same_day(night, next));
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = date(2026, 1, 8).and_hms_opt(14, 0, 0).unwrap();
        assert_eq!(parse_instant("2026-01-08T14:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2026-01-08T14:00").unwrap(), expected);
        assert_eq!(parse_instant("2026-01-08 14:00").unwrap(), expected);
        // Offset is dropped, wall-clock kept
        assert_eq!(parse_instant("2026-01-08T14:00:00+05:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_instant_invalid() {
        let result = parse_instant("tomorrow at noon");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
