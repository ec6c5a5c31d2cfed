//! Activity of records and their flags at a reference time

use crate::config::Config;
use crate::types::{Flag, NotamRecord};
use jiff::Timestamp;
use log::{debug, trace};

impl NotamRecord {
    /// Whether `now` lies in the record's `[effective, expiration)` window
    ///
    /// A missing effective date means the distant past, a missing expiration
    /// the distant future.
    pub fn is_active(&self, now: Timestamp) -> bool {
        let effective = self.effective.unwrap_or(Timestamp::MIN);
        let expiration = self.expiration.unwrap_or(Timestamp::MAX);
        effective <= now && now < expiration
    }

    /// Whether the record is active and, if it carries a flag, the flag's own
    /// timeframe also covers `now`
    pub fn is_notam_and_flag_active(&self, now: Timestamp, config: &Config) -> bool {
        if !self.is_active(now) {
            trace!("NOTAM {} outside its effective window", self.id);
            return false;
        }
        self.flag
            .as_ref()
            .is_none_or(|flag| flag.is_flag_active(now, config))
    }

    /// [`NotamRecord::is_notam_and_flag_active`] against the current wall-clock time
    pub fn is_notam_and_flag_active_now(&self, config: &Config) -> bool {
        self.is_notam_and_flag_active(Timestamp::now(), config)
    }
}

/// Flags of every record that is active together with its flag at `now`
///
/// Preserves input order. Records without a flag contribute nothing.
pub fn all_active_flags<'a>(
    records: impl IntoIterator<Item = &'a NotamRecord>,
    now: Timestamp,
    config: &Config,
) -> Vec<&'a Flag> {
    let flags: Vec<&Flag> = records
        .into_iter()
        .filter(|record| record.is_notam_and_flag_active(now, config))
        .filter_map(|record| record.flag.as_ref())
        .collect();

    debug!("{} active flags at {now}", flags.len());
    flags
}
