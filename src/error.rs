/// Failures of the strict parsing helpers
///
/// The evaluation engine itself never returns these; lenient callers turn them
/// into defaults plus a [`Warning`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid NOTAM date (expected `MM/DD/YYYY HHmm` with optional `EST`): {0:?}")]
    InvalidDate(String),

    #[error("NOTAM date is not a valid civil date/time: {0:?}")]
    DateOutOfRange(String),

    #[error("Local offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// Non-fatal issues encountered while building a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Unparsable date string, the "always" default was used instead
    InvalidDate { field: &'static str, value: String },

    /// Record arrived without message text (e.g. mismatched index pairing)
    MissingMessage,

    /// No ICAO text was supplied, type left as `Unknown`
    MissingIcaoMessage,
}

pub type Result<T> = std::result::Result<T, Error>;
