//! Evaluation configuration
//!
//! Resolved once by the caller (from a file, CLI flags or plain code) and then
//! passed by reference into the evaluators. Nothing in this crate reads
//! environment variables or global state.

use crate::error::{Error, Result};
use jiff::tz::Offset;
use log::warn;
use serde::{Deserialize, Serialize};

/// UTC-5, the fixed offset FAA feeds use for `EST`-suffixed dates
pub const EST_OFFSET_MINUTES: i32 = -5 * 60;

/// Largest offset representable by `jiff::tz::Offset` (±25:59:59), in minutes
const MAX_OFFSET_MINUTES: i32 = 25 * 60 + 59;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed offset applied to the reference instant before recurring weekly
    /// schedules are checked against local weekday and clock time
    pub local_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_offset_minutes: EST_OFFSET_MINUTES,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_offset_minutes(mut self, minutes: i32) -> Self {
        self.local_offset_minutes = minutes;
        self
    }

    /// Local offset, rejecting values `jiff` cannot represent
    pub fn try_local_offset(&self) -> Result<Offset> {
        if self.local_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(Error::InvalidOffset(self.local_offset_minutes));
        }
        Offset::from_seconds(self.local_offset_minutes * 60)
            .map_err(|_| Error::InvalidOffset(self.local_offset_minutes))
    }

    /// Local offset, falling back to UTC when the configured value is invalid
    pub fn local_offset(&self) -> Offset {
        self.try_local_offset().unwrap_or_else(|err| {
            warn!("{err}, evaluating recurring schedules in UTC");
            Offset::UTC
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};

    #[test]
    fn default_is_est() {
        let config = Config::default();
        assert_eq!(config.local_offset_minutes, -300);
        assert_ok_eq!(config.try_local_offset(), Offset::constant(-5));
    }

    #[test]
    fn invalid_offset_falls_back_to_utc() {
        let config = Config::new().with_local_offset_minutes(30 * 60);
        assert_err!(config.try_local_offset());
        assert_eq!(config.local_offset(), Offset::UTC);
    }

    #[test]
    fn half_hour_offsets() {
        let config = Config::new().with_local_offset_minutes(5 * 60 + 30);
        assert_eq!(config.local_offset().seconds(), 19_800);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"local_offset_minutes": 60}"#).unwrap();
        assert_eq!(config.local_offset_minutes, 60);
    }
}
