//! Timeframes embedded in NOTAM message text
//!
//! Two shapes are recognized:
//!
//! - one-time ranges such as `1 JUL 0700Z - 5 JUL 1300Z`, made of
//!   day/month/Zulu-time triples (an explicit year may follow the month)
//! - recurring weekly schedules such as `MON-FRI 0700-1900` or
//!   `SUN/MON/TUE 0000-2359`, evaluated in local time
//!
//! A message without any timeframe is in effect at all times.

use crate::config::Config;
use crate::date::instant_at;
use crate::types::{RecurringWindow, TimeWindow, Weekdays};
use crate::utils::text::{digits, parse_hhmm, tokenize, trim_punctuation};
use jiff::Timestamp;
use jiff::tz::{Offset, TimeZone};
use log::{debug, trace};

const MONTHS: [(&str, i8); 24] = [
    ("JAN", 1),
    ("JANUARY", 1),
    ("FEB", 2),
    ("FEBRUARY", 2),
    ("MAR", 3),
    ("MARCH", 3),
    ("APR", 4),
    ("APRIL", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUNE", 6),
    ("JUL", 7),
    ("JULY", 7),
    ("AUG", 8),
    ("AUGUST", 8),
    ("SEP", 9),
    ("SEPT", 9),
    ("SEPTEMBER", 9),
    ("OCT", 10),
    ("OCTOBER", 10),
    ("NOV", 11),
    ("NOVEMBER", 11),
    ("DEC", 12),
    ("DECEMBER", 12),
];

/// Weekday names and abbreviations, numbered 1 (Sunday) through 7 (Saturday)
const WEEKDAYS: [(&str, u8); 17] = [
    ("SUN", 1),
    ("SUNDAY", 1),
    ("MON", 2),
    ("MONDAY", 2),
    ("TUE", 3),
    ("TUES", 3),
    ("TUESDAY", 3),
    ("WED", 4),
    ("WEDNESDAY", 4),
    ("THU", 5),
    ("THUR", 5),
    ("THURS", 5),
    ("THURSDAY", 5),
    ("FRI", 6),
    ("FRIDAY", 6),
    ("SAT", 7),
    ("SATURDAY", 7),
];

/// Result of scanning a message for a timeframe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeframe<T> {
    /// No timeframe mentioned, the condition always applies
    Absent,
    /// A timeframe was started but could not be completed
    Unresolved,
    Found(T),
}

impl<T> Timeframe<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Timeframe::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Whether the one-time date range in `message` covers `now`
///
/// The first two day/month/time triples form a `[start, end)` window. With no
/// triple at all the message is always active, with a single triple the end is
/// unknown and the message is treated as inactive.
pub fn is_time_frame_active(message: &str, now: Timestamp) -> bool {
    match find_time_window(message, now) {
        Timeframe::Absent => true,
        Timeframe::Unresolved => false,
        Timeframe::Found(window) => window.contains(now, &Config::default()),
    }
}

/// Whether the recurring weekly schedule in `message` covers `now`
///
/// `now` is converted to the configured local offset before the weekday and
/// clock time are compared against each window.
pub fn closed_for_time_frame(message: &str, now: Timestamp, config: &Config) -> bool {
    match find_recurring_windows(message) {
        Timeframe::Absent => true,
        Timeframe::Unresolved => false,
        Timeframe::Found(windows) => windows.iter().any(|window| window.contains(now, config)),
    }
}

/// [`is_time_frame_active`] against the current wall-clock time
pub fn is_time_frame_active_now(message: &str) -> bool {
    is_time_frame_active(message, Timestamp::now())
}

/// [`closed_for_time_frame`] against the current wall-clock time
pub fn closed_for_time_frame_now(message: &str, config: &Config) -> bool {
    closed_for_time_frame(message, Timestamp::now(), config)
}

/// Locate the one-time date range in `message`
///
/// Years default to the UTC year of `reference`, and an end without a year
/// takes the start's. An end that would then fall before its start is moved
/// into the following year.
pub fn find_time_window(message: &str, reference: Timestamp) -> Timeframe<TimeWindow> {
    let words = range_words(message);
    let default_year = reference.to_zoned(TimeZone::UTC).year();

    let mut triples = Vec::with_capacity(2);
    let mut pos = 0;
    while pos < words.len() && triples.len() < 2 {
        match date_triple(&words, pos) {
            Some((triple, used)) => {
                triples.push(triple);
                pos += used;
            }
            None => pos += 1,
        }
    }

    match triples.as_slice() {
        [] => Timeframe::Absent,
        [_] => {
            debug!("single date found without an end in {message:?}");
            Timeframe::Unresolved
        }
        [start, end, ..] => {
            let Some(start_instant) = start.instant(default_year) else {
                return Timeframe::Unresolved;
            };
            let end_year = start.year.unwrap_or(default_year);
            let mut end_instant = end.instant(end_year);
            if end.year.is_none() && end_instant.is_some_and(|end| end <= start_instant) {
                end_instant = end.instant(end_year + 1);
            }
            let Some(end_instant) = end_instant else {
                return Timeframe::Unresolved;
            };

            trace!("date range {start_instant} - {end_instant}");
            Timeframe::Found(TimeWindow::Single {
                start: start_instant,
                end: end_instant,
            })
        }
    }
}

/// Locate every recurring weekly window in `message`
///
/// Each weekday group (`MON`, `MON-FRI`, `SAT/SUN`, `DLY`, `SAT AND SUN`) must
/// be followed by a `HHMM-HHMM` clock range. A group without one stops the
/// scan and makes the whole result [`Timeframe::Unresolved`], even when
/// complete windows were read before it.
pub fn find_recurring_windows(message: &str) -> Timeframe<Vec<TimeWindow>> {
    let tokens = tokenize(message);
    let words: Vec<&str> = tokens.iter().map(|token| trim_punctuation(token)).collect();

    let mut windows = Vec::new();
    let mut unresolved = false;
    let mut pos = 0;
    while pos < words.len() {
        let Some(mut days) = day_group(words[pos]) else {
            pos += 1;
            continue;
        };
        pos += 1;

        while pos < words.len() {
            if let Some(more) = day_group(words[pos]) {
                days = days.union(more);
                pos += 1;
            } else if matches!(words[pos], "AND" | "&")
                && words.get(pos + 1).and_then(|word| day_group(word)).is_some()
            {
                pos += 1;
            } else {
                break;
            }
        }

        match words.get(pos).and_then(|word| clock_range(word)) {
            Some((start_minute, end_minute)) => {
                let window = RecurringWindow {
                    days,
                    start_minute,
                    end_minute,
                };
                trace!("recurring window {window:?}");
                windows.push(TimeWindow::Recurring(window));
                pos += 1;
            }
            None => {
                debug!("weekday without clock range in {message:?}");
                unresolved = true;
                break;
            }
        }
    }

    if unresolved {
        Timeframe::Unresolved
    } else if windows.is_empty() {
        Timeframe::Absent
    } else {
        Timeframe::Found(windows)
    }
}

/// Day, month and Zulu time of one date mention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateTriple {
    day: i8,
    month: i8,
    year: Option<i16>,
    minutes: u16,
}

impl DateTriple {
    fn instant(&self, default_year: i16) -> Option<Timestamp> {
        let year = self.year.unwrap_or(default_year);
        instant_at(year, self.month, self.day, self.minutes, Offset::UTC)
    }
}

/// Tokens for date range scanning, with `-` treated as a separator
fn range_words(message: &str) -> Vec<String> {
    tokenize(message)
        .iter()
        .flat_map(|token| token.split('-'))
        .map(trim_punctuation)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a triple starting at `pos`, returning it with the number of tokens used
fn date_triple(words: &[String], pos: usize) -> Option<(DateTriple, usize)> {
    let day = day_of_month(words.get(pos)?)?;
    let month = month_number(words.get(pos + 1)?)?;

    let (year, time_pos) = match words.get(pos + 2).and_then(|word| explicit_year(word)) {
        Some(year) => (Some(year), pos + 3),
        None => (None, pos + 2),
    };
    let minutes = zulu_time(words.get(time_pos)?)?;

    let triple = DateTriple {
        day,
        month,
        year,
        minutes,
    };
    Some((triple, time_pos + 1 - pos))
}

fn day_of_month(word: &str) -> Option<i8> {
    let digits = digits(word);
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    let day: i8 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn month_number(word: &str) -> Option<i8> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, number)| *number)
}

fn explicit_year(word: &str) -> Option<i16> {
    if word.len() != 4 || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i16 = word.parse().ok()?;
    (1900..=9999).contains(&year).then_some(year)
}

fn zulu_time(word: &str) -> Option<u16> {
    parse_hhmm(word.strip_suffix('Z')?)
}

/// Parse a weekday group token (`MON`, `MON-FRI`, `SAT/SUN`, `DLY`, ...)
fn day_group(word: &str) -> Option<Weekdays> {
    word.split('/').try_fold(Weekdays::NONE, |days, part| {
        let part_days = match part {
            "DLY" | "DAILY" => Weekdays::ALL,
            "WKDAYS" | "WEEKDAYS" => Weekdays::WORKDAYS,
            "WKEND" | "WKENDS" | "WEEKEND" | "WEEKENDS" => Weekdays::WEEKEND,
            _ => match part.split_once('-') {
                Some((first, last)) => Weekdays::range(weekday(first)?, weekday(last)?)?,
                None => Weekdays::day(weekday(part)?)?,
            },
        };
        Some(days.union(part_days))
    })
}

fn weekday(word: &str) -> Option<u8> {
    WEEKDAYS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, number)| *number)
}

/// Parse `HHMM-HHMM` into minutes of day
fn clock_range(word: &str) -> Option<(u16, u16)> {
    let (start, end) = word.split_once('-')?;
    Some((parse_hhmm(start)?, parse_hhmm(end)?))
}
