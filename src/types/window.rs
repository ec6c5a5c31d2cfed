use crate::config::Config;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of weekdays, numbered 1 (Sunday) through 7 (Saturday)
///
/// Stored as a bit set where bit `n - 1` marks weekday `n`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Weekdays(u8);

impl Weekdays {
    pub const NONE: Weekdays = Weekdays(0);
    pub const ALL: Weekdays = Weekdays(0b111_1111);
    /// Monday through Friday
    pub const WORKDAYS: Weekdays = Weekdays(0b011_1110);
    /// Saturday and Sunday
    pub const WEEKEND: Weekdays = Weekdays(0b100_0001);

    /// Single weekday, `None` if outside 1..=7
    pub fn day(number: u8) -> Option<Self> {
        (1..=7).contains(&number).then(|| Self(1 << (number - 1)))
    }

    /// Inclusive day range, wrapping past Saturday (`FRI-MON` = Fri, Sat, Sun, Mon)
    pub fn range(first: u8, last: u8) -> Option<Self> {
        if !(1..=7).contains(&first) || !(1..=7).contains(&last) {
            return None;
        }

        let mut days = Self::NONE;
        let mut day = first;
        loop {
            days = days.union(Self(1 << (day - 1)));
            if day == last {
                return Some(days);
            }
            day = day % 7 + 1;
        }
    }

    pub fn union(self, other: Weekdays) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether weekday `number` (1 = Sunday) is part of the set
    pub fn contains(self, number: u8) -> bool {
        (1..=7).contains(&number) && self.0 & (1 << (number - 1)) != 0
    }

    /// Iterate over the contained weekday numbers in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=7).filter(move |day| self.contains(*day))
    }
}

impl fmt::Debug for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Whether clock value `now` falls inside the daily window `start..=end`
///
/// Works on any monotonic clock encoding (minutes of day or `HHMM` integers).
/// When `start > end` the window spans midnight and matches `now >= start` or
/// `now <= end`.
pub fn within_time_frame(start: u16, end: u16, now: u16) -> bool {
    if start <= end {
        start <= now && now <= end
    } else {
        now >= start || now <= end
    }
}

/// Recurring weekly window: a day set plus a daily clock range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringWindow {
    pub days: Weekdays,
    /// Minute of day the window opens
    pub start_minute: u16,
    /// Minute of day the window closes; smaller than `start_minute` when it spans midnight
    pub end_minute: u16,
}

impl RecurringWindow {
    /// Check a local weekday (1 = Sunday) and minute of day against the window
    pub fn contains(&self, weekday: u8, minute_of_day: u16) -> bool {
        self.days.contains(weekday)
            && within_time_frame(self.start_minute, self.end_minute, minute_of_day)
    }
}

/// Local weekday (1 = Sunday) and minute of day of `now` at the configured offset
pub fn local_clock(now: Timestamp, config: &Config) -> (u8, u16) {
    let local = now.to_zoned(TimeZone::fixed(config.local_offset()));
    let weekday = local.weekday().to_sunday_one_offset() as u8;
    let minute = local.hour() as u16 * 60 + local.minute() as u16;
    (weekday, minute)
}

/// Effective window extracted from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    /// One-time `[start, end)` instant pair
    Single { start: Timestamp, end: Timestamp },
    Recurring(RecurringWindow),
}

impl TimeWindow {
    /// Whether `now` falls inside the window
    ///
    /// Recurring windows are checked against the local weekday and clock time
    /// at the configured offset.
    pub fn contains(&self, now: Timestamp, config: &Config) -> bool {
        match self {
            TimeWindow::Single { start, end } => *start <= now && now < *end,
            TimeWindow::Recurring(window) => {
                let (weekday, minute) = local_clock(now, config);
                window.contains(weekday, minute)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn within_time_frame_examples() {
        assert!(within_time_frame(0, 2359, 1200));
        assert!(within_time_frame(2200, 900, 700));
        assert!(!within_time_frame(0, 1000, 1200));
        assert!(!within_time_frame(2200, 900, 1200));
    }

    #[test]
    fn within_time_frame_bounds_are_inclusive() {
        assert!(within_time_frame(700, 1900, 700));
        assert!(within_time_frame(700, 1900, 1900));
        assert!(within_time_frame(2200, 900, 2200));
        assert!(within_time_frame(2200, 900, 900));
        assert!(!within_time_frame(2200, 900, 901));
    }

    #[test]
    fn weekdays_constants() {
        assert!(Weekdays::WORKDAYS.contains(2));
        assert!(Weekdays::WORKDAYS.contains(6));
        assert!(!Weekdays::WORKDAYS.contains(1));
        assert!(!Weekdays::WORKDAYS.contains(7));
        assert!(Weekdays::WEEKEND.contains(1));
        assert!(Weekdays::WEEKEND.contains(7));
        assert_eq!(Weekdays::WORKDAYS.union(Weekdays::WEEKEND), Weekdays::ALL);
    }

    #[test]
    fn weekdays_day_bounds() {
        assert_eq!(Weekdays::day(0), None);
        assert_eq!(Weekdays::day(8), None);
        assert!(!Weekdays::ALL.contains(0));
        assert!(!Weekdays::ALL.contains(8));
    }

    #[test]
    fn weekdays_range_wraps() {
        assert_eq!(Weekdays::range(2, 6), Some(Weekdays::WORKDAYS));
        assert_compact_debug_snapshot!(Weekdays::range(6, 2).unwrap(), @"{1, 2, 6, 7}");
        assert_eq!(Weekdays::range(4, 4), Weekdays::day(4));
        assert_eq!(Weekdays::range(0, 4), None);
    }

    #[test]
    fn recurring_window_contains() {
        let window = RecurringWindow {
            days: Weekdays::day(5).unwrap(),
            start_minute: 22 * 60,
            end_minute: 6 * 60,
        };
        assert!(window.contains(5, 23 * 60));
        assert!(window.contains(5, 60));
        assert!(!window.contains(5, 12 * 60));
        assert!(!window.contains(4, 23 * 60));
    }

    #[test]
    fn single_window_is_half_open() {
        let config = Config::default();
        let start: Timestamp = "2025-07-01T07:00:00Z".parse().unwrap();
        let end: Timestamp = "2025-07-05T13:00:00Z".parse().unwrap();
        let window = TimeWindow::Single { start, end };

        assert!(window.contains(start, &config));
        assert!(!window.contains(end, &config));
        assert!(window.contains("2025-07-03T00:00:00Z".parse().unwrap(), &config));
        assert!(!window.contains("2025-06-30T23:59:00Z".parse().unwrap(), &config));
    }

    #[test]
    fn local_clock_applies_offset() {
        let now: Timestamp = "2025-07-04T03:30:00Z".parse().unwrap();

        // Friday 03:30 UTC is still Thursday 22:30 at UTC-5
        assert_eq!(local_clock(now, &Config::default()), (5, 22 * 60 + 30));
        assert_eq!(
            local_clock(now, &Config::new().with_local_offset_minutes(0)),
            (6, 3 * 60 + 30)
        );
    }

    #[test]
    fn recurring_window_uses_local_clock() {
        let window = TimeWindow::Recurring(RecurringWindow {
            days: Weekdays::day(5).unwrap(),
            start_minute: 20 * 60,
            end_minute: 23 * 60,
        });
        let now: Timestamp = "2025-07-04T03:30:00Z".parse().unwrap();

        assert!(window.contains(now, &Config::default()));
        assert!(!window.contains(now, &Config::new().with_local_offset_minutes(0)));
    }
}
