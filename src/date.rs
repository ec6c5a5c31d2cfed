//! Issue/start/end date strings supplied alongside the NOTAM text
//!
//! Feeds deliver these as `MM/DD/YYYY HHmm`, in UTC unless suffixed with
//! `EST`. Parsing is done with fixed-width checks on whitespace tokens.

use crate::config::EST_OFFSET_MINUTES;
use crate::error::{Error, Result, Warning};
use crate::utils::text::parse_hhmm;
use jiff::civil::DateTime;
use jiff::tz::{Offset, TimeZone};
use jiff::{SignedDuration, Timestamp};
use log::warn;

/// End-date marker for notices without a planned expiration
pub const PERMANENT: &str = "PERM";

/// Parse a `MM/DD/YYYY HHmm` date string with optional `EST` suffix
pub fn parse_notam_date(text: &str) -> Result<Timestamp> {
    let invalid = || Error::InvalidDate(text.to_string());

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (date, time, zone) = match tokens.as_slice() {
        [date, time] => (*date, *time, None),
        [date, time, zone] => (*date, *time, Some(*zone)),
        _ => return Err(invalid()),
    };

    let offset = match zone {
        None => Offset::UTC,
        Some(zone) if zone.eq_ignore_ascii_case("EST") => {
            Offset::from_seconds(EST_OFFSET_MINUTES * 60).map_err(|_| invalid())?
        }
        Some(_) => return Err(invalid()),
    };

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(invalid());
    }
    let month = parse_digits(&date[0..2]).ok_or_else(invalid)?;
    let day = parse_digits(&date[3..5]).ok_or_else(invalid)?;
    let year = parse_digits(&date[6..10]).ok_or_else(invalid)?;
    let minutes = parse_hhmm(time).ok_or_else(invalid)?;

    instant_at(year as i16, month as i8, day as i8, minutes, offset)
        .ok_or_else(|| Error::DateOutOfRange(text.to_string()))
}

/// Instant of a civil date plus `minutes` past its midnight at `offset`
///
/// `None` for impossible dates. `minutes == 1440` rolls over to the next
/// day's midnight.
pub(crate) fn instant_at(
    year: i16,
    month: i8,
    day: i8,
    minutes: u16,
    offset: Offset,
) -> Option<Timestamp> {
    let midnight = DateTime::new(year, month, day, 0, 0, 0, 0)
        .ok()?
        .to_zoned(TimeZone::fixed(offset))
        .ok()?
        .timestamp();

    midnight
        .checked_add(SignedDuration::from_mins(i64::from(minutes)))
        .ok()
}

/// Lenient variant used while building records
///
/// Absent, blank and `PERM` values map to `None` ("always") silently. Values
/// that fail to parse also map to `None`, with a warning recorded.
pub fn parse_notam_date_lenient(
    field: &'static str,
    text: Option<&str>,
    warnings: &mut Vec<Warning>,
) -> Option<Timestamp> {
    let text = text.map(str::trim).filter(|text| !text.is_empty())?;
    if text.eq_ignore_ascii_case(PERMANENT) {
        return None;
    }

    match parse_notam_date(text) {
        Ok(timestamp) => Some(timestamp),
        Err(err) => {
            warn!("discarding {field} date: {err}");
            warnings.push(Warning::InvalidDate {
                field,
                value: text.to_string(),
            });
            None
        }
    }
}

fn parse_digits(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_none, assert_ok_eq, assert_some_eq};

    fn ts(text: &str) -> Timestamp {
        text.parse().unwrap()
    }

    #[test]
    fn parse_utc_date() {
        assert_ok_eq!(
            parse_notam_date("07/01/2025 0700"),
            ts("2025-07-01T07:00:00Z")
        );
    }

    #[test]
    fn parse_est_date() {
        assert_ok_eq!(
            parse_notam_date("07/01/2025 0700 EST"),
            ts("2025-07-01T12:00:00Z")
        );
        assert_ok_eq!(
            parse_notam_date("12/31/2025 2200 est"),
            ts("2026-01-01T03:00:00Z")
        );
    }

    #[test]
    fn parse_end_of_day() {
        assert_ok_eq!(
            parse_notam_date("02/28/2025 2400"),
            ts("2025-03-01T00:00:00Z")
        );
    }

    #[test]
    fn reject_malformed_dates() {
        assert_matches!(parse_notam_date(""), Err(Error::InvalidDate(_)));
        assert_matches!(parse_notam_date("2025-07-01 0700"), Err(Error::InvalidDate(_)));
        assert_matches!(parse_notam_date("07/01/2025"), Err(Error::InvalidDate(_)));
        assert_matches!(parse_notam_date("07/01/2025 07:00"), Err(Error::InvalidDate(_)));
        assert_matches!(parse_notam_date("07/01/2025 0700 PST"), Err(Error::InvalidDate(_)));
        assert_matches!(parse_notam_date("7/1/2025 0700"), Err(Error::InvalidDate(_)));
    }

    #[test]
    fn reject_impossible_dates() {
        assert_matches!(parse_notam_date("02/30/2025 0700"), Err(Error::DateOutOfRange(_)));
        assert_matches!(parse_notam_date("13/01/2025 0700"), Err(Error::DateOutOfRange(_)));
    }

    #[test]
    fn lenient_defaults() {
        let mut warnings = Vec::new();
        assert_none!(parse_notam_date_lenient("start", None, &mut warnings));
        assert_none!(parse_notam_date_lenient("start", Some("  "), &mut warnings));
        assert_none!(parse_notam_date_lenient("end", Some("PERM"), &mut warnings));
        assert!(warnings.is_empty());

        assert_some_eq!(
            parse_notam_date_lenient("start", Some("07/01/2025 0700"), &mut warnings),
            ts("2025-07-01T07:00:00Z")
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn lenient_records_warning() {
        let mut warnings = Vec::new();
        assert_none!(parse_notam_date_lenient("end", Some("soon"), &mut warnings));
        assert_eq!(
            warnings,
            vec![Warning::InvalidDate {
                field: "end",
                value: "soon".to_string()
            }]
        );
    }
}
