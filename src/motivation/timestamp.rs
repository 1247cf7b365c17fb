//! Timestamp parsing
//!
//! Only the exact layout `YYYY-MM-DDTHH:MM:SSZ` is accepted.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::RequestError;

const LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LAYOUT_LEN: usize = "2006-01-02T15:04:05Z".len();

/// Parse a UTC timestamp in the fixed layout
///
/// The length and whitespace checks reject unpadded fields and signed or
/// five-digit years, which chrono's numeric specifiers would otherwise tolerate.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RequestError> {
    if value.len() != LAYOUT_LEN
        || !value.is_ascii()
        || value.bytes().any(|b| b.is_ascii_whitespace())
    {
        return Err(RequestError::InvalidDate(value.to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(value, LAYOUT)
        .map_err(|_| RequestError::InvalidDate(value.to_string()))?;

    // chrono reads second 60 as a leap second, stored as nanos >= 1e9
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(RequestError::InvalidDate(value.to_string()));
    }

    Ok(naive.and_utc())
}

/// Hour of day in the server's local time zone
pub fn local_hour(instant: DateTime<Utc>) -> u32 {
    hour_in(instant, &Local)
}

/// Hour of day in an explicit time zone
fn hour_in<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> u32 {
    instant.with_timezone(tz).hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    #[test]
    fn test_parse_valid() {
        let ts = parse_timestamp("2024-03-15T09:30:00Z").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 3);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        let rejected = [
            "",
            "not-a-date",
            "2024-03-15",
            "2024-03-15T09:30:00",
            "2024-03-15T09:30:00z",
            "2024-03-15T09:30:00.123Z",
            "2024-03-15T09:30:00+00:00",
            "2024-03-15 09:30:00Z",
            "2024-3-15T09:30:00Z",
            "2024-03-15T9:30:00Z",
            "2024-03-15T 9:30:00Z",
            "+2024-03-15T09:30:00Z",
        ];
        for value in rejected {
            assert_eq!(
                parse_timestamp(value),
                Err(RequestError::InvalidDate(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        for value in [
            "2024-13-01T00:00:00Z",
            "2024-02-30T00:00:00Z",
            "2024-01-01T24:00:00Z",
            "2024-01-01T00:60:00Z",
            "2024-01-01T07:00:60Z",
            "2024-01-01T07:00:61Z",
        ] {
            assert!(parse_timestamp(value).is_err(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_hour_in_utc() {
        let ts = parse_timestamp("2024-01-01T07:00:00Z").unwrap();
        assert_eq!(hour_in(ts, &Utc), 7);
    }

    #[test]
    fn test_hour_in_offset_zone() {
        let ts = parse_timestamp("2024-01-01T22:15:00Z").unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(hour_in(ts, &tokyo), 7);

        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(hour_in(ts, &new_york), 17);
    }

    #[test]
    fn test_local_hour_matches_local_zone() {
        let ts = parse_timestamp("2024-06-01T12:00:00Z").unwrap();
        assert_eq!(local_hour(ts), ts.with_timezone(&Local).hour());
    }
}
