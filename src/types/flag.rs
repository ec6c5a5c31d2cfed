use crate::config::Config;
use crate::timeframe::{self, Timeframe};
use crate::types::{FlagKind, NotamId, TimeWindow};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Normalized record of one condition extracted from a NOTAM message
///
/// Keeps the source message because activity is decided by re-scanning it
/// against a reference time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub kind: FlagKind,
    /// Runway ident (`15/33`, `09L`) or NAVAID facility designator
    pub ident: Option<String>,
    /// Partial-outage component (`GS`, `LOC`, `DME`, ...)
    pub subtype: Option<String>,
    /// Source message text
    pub message: String,
    /// Identifier of the NOTAM the flag was extracted from
    pub notam_id: Option<NotamId>,
}

impl Flag {
    pub fn new(kind: FlagKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            ident: None,
            subtype: None,
            message: message.into(),
            notam_id: None,
        }
    }

    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_notam_id(mut self, notam_id: NotamId) -> Self {
        self.notam_id = Some(notam_id);
        self
    }

    /// Whether the flag's own timeframe covers `now`
    ///
    /// Aerodrome closures are checked against the one-time date range in the
    /// message, every other kind against its recurring weekly schedule. A
    /// message without any timeframe is always in effect.
    pub fn is_flag_active(&self, now: Timestamp, config: &Config) -> bool {
        if self.kind.uses_single_range() {
            timeframe::is_time_frame_active(&self.message, now)
        } else {
            timeframe::closed_for_time_frame(&self.message, now, config)
        }
    }

    /// Windows the flag's timeframe is evaluated against
    ///
    /// `reference` supplies the year for date ranges that omit one.
    pub fn time_windows(&self, reference: Timestamp) -> Timeframe<Vec<TimeWindow>> {
        if self.kind.uses_single_range() {
            match timeframe::find_time_window(&self.message, reference) {
                Timeframe::Absent => Timeframe::Absent,
                Timeframe::Unresolved => Timeframe::Unresolved,
                Timeframe::Found(window) => Timeframe::Found(vec![window]),
            }
        } else {
            timeframe::find_recurring_windows(&self.message)
        }
    }

    /// [`Flag::is_flag_active`] against the current wall-clock time
    pub fn is_flag_active_now(&self, config: &Config) -> bool {
        self.is_flag_active(Timestamp::now(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> Config {
        Config::new().with_local_offset_minutes(0)
    }

    #[test]
    fn builder_fills_optional_fields() {
        let flag = Flag::new(FlagKind::IlsSubtypeOutage, "ILS RWY 15 GS U/S")
            .with_ident("15")
            .with_subtype("GS");

        assert_eq!(flag.ident.as_deref(), Some("15"));
        assert_eq!(flag.subtype.as_deref(), Some("GS"));
        assert_eq!(flag.notam_id, None);
    }

    #[test]
    fn aerodrome_flag_uses_date_range() {
        let flag = Flag::new(
            FlagKind::AerodromeClosed,
            "AERODROME CLSD 1 JUL 0700Z - 5 JUL 1300Z",
        );

        assert!(flag.is_flag_active("2025-07-02T12:00:00Z".parse().unwrap(), &utc()));
        assert!(!flag.is_flag_active("2025-07-06T12:00:00Z".parse().unwrap(), &utc()));
    }

    #[test]
    fn runway_flag_uses_weekly_schedule() {
        let flag = Flag::new(FlagKind::RunwayClosed, "RWY 15/33 CLSD THU 0000-2359");

        // 2025-07-03 is a Thursday, 2025-07-04 a Friday
        assert!(flag.is_flag_active("2025-07-03T18:00:00Z".parse().unwrap(), &utc()));
        assert!(!flag.is_flag_active("2025-07-04T18:00:00Z".parse().unwrap(), &utc()));
    }

    #[test]
    fn time_windows_follow_kind() {
        let now = "2025-07-02T12:00:00Z".parse().unwrap();
        let aerodrome = Flag::new(
            FlagKind::AerodromeClosed,
            "AERODROME CLSD 1 JUL 0700Z - 5 JUL 1300Z",
        );
        assert_eq!(aerodrome.time_windows(now).found().map(|w| w.len()), Some(1));

        let runway = Flag::new(FlagKind::RunwayClosed, "RWY 15/33 CLSD MON-FRI 0700-1900");
        let windows = runway.time_windows(now).found().unwrap();
        assert!(matches!(windows[0], TimeWindow::Recurring(_)));
    }

    #[test]
    fn flag_without_timeframe_is_active() {
        let flag = Flag::new(FlagKind::RunwayClosed, "RWY 15/33 CLSD");
        assert!(flag.is_flag_active("2025-07-04T18:00:00Z".parse().unwrap(), &utc()));
    }
}
