use serde::{Deserialize, Serialize};
use std::fmt;

/// NOTAM category decoded from the ICAO Q-code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotamType {
    /// Temporary flight restriction / warning area
    Tfr,
    Runway,
    Obstacle,
    Taxiway,
    /// Aerodrome facilities and services
    Airport,
    /// Instrument approach/departure procedures
    Procedure,
    Airspace,
    Birds,
    /// No ICAO text or no Q-code payload at all
    Unknown,
    /// A Q-code was present but no rule matched it
    None,
}

impl NotamType {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            NotamType::Tfr => "TFR",
            NotamType::Runway => "Runway",
            NotamType::Obstacle => "Obstacle",
            NotamType::Taxiway => "Taxiway",
            NotamType::Airport => "Airport",
            NotamType::Procedure => "Procedure",
            NotamType::Airspace => "Airspace",
            NotamType::Birds => "Birds",
            NotamType::Unknown => "Unknown",
            NotamType::None => "None",
        }
    }
}

impl fmt::Display for NotamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of operational condition carried by a [`Flag`](crate::Flag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKind {
    AerodromeClosed,
    RunwayClosed,
    RunwayWet,
    IlsOutage,
    /// Partial ILS outage (GS, LOC, DME, ...)
    IlsSubtypeOutage,
    TacanApproachOutage,
    TacanNavOutage,
    VortacOutage,
}

impl FlagKind {
    /// Whether activity is decided by a one-time date range
    ///
    /// Aerodrome closures are published as `DD MON HHMMZ - DD MON HHMMZ`
    /// ranges; every other kind uses a recurring weekly schedule.
    pub fn uses_single_range(self) -> bool {
        matches!(self, FlagKind::AerodromeClosed)
    }

    /// Whether the flag concerns a radio navigation aid
    pub fn is_navaid(self) -> bool {
        matches!(
            self,
            FlagKind::IlsOutage
                | FlagKind::IlsSubtypeOutage
                | FlagKind::TacanApproachOutage
                | FlagKind::TacanNavOutage
                | FlagKind::VortacOutage
        )
    }
}
