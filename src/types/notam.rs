use crate::classify::classify;
use crate::contractions::expand_contractions;
use crate::date::parse_notam_date_lenient;
use crate::error::Warning;
use crate::extract::extract_flag;
use crate::red_words::has_warnings;
use crate::types::{Flag, NotamType};
use crate::utils::text::{tokenize, trim_punctuation};
use jiff::Timestamp;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// NOTAM identifier: accountable facility plus NOTAM number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotamId {
    pub facility: String,
    /// `06/123` for FAA domestic notices, `A1234/25` for ICAO series
    pub number: Option<String>,
}

impl NotamId {
    /// Extract the identifier from raw NOTAM text
    ///
    /// FAA text starts with `!FAC NN/NNN`; the token after the `!` marker is
    /// the accountable facility and the next one the number. Without a marker
    /// the first ICAO series number (`A1234/25`) is used together with the
    /// facility designator.
    pub fn parse(raw_text: &str, designator: &str) -> Self {
        let tokens = tokenize(raw_text);

        if let Some(pos) = tokens.iter().position(|token| token.starts_with('!')) {
            let facility = trim_punctuation(&tokens[pos]).to_string();
            let facility = if facility.is_empty() {
                designator.to_string()
            } else {
                facility
            };
            let number = tokens
                .get(pos + 1)
                .map(|token| trim_punctuation(token))
                .filter(|token| is_notam_number(token))
                .map(str::to_string);
            return Self { facility, number };
        }

        let number = tokens
            .iter()
            .map(|token| trim_punctuation(token))
            .find(|token| is_icao_series_number(token))
            .map(str::to_string);

        Self {
            facility: designator.to_string(),
            number,
        }
    }
}

impl fmt::Display for NotamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.number {
            Some(number) => write!(f, "{} {}", self.facility, number),
            None => f.write_str(&self.facility),
        }
    }
}

/// `NN/NNN`, digits on both sides of a single slash
fn is_domestic_number(token: &str) -> bool {
    match token.split_once('/') {
        Some((month, serial)) => {
            !month.is_empty()
                && !serial.is_empty()
                && month.bytes().all(|b| b.is_ascii_digit())
                && serial.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// `A1234/25`, series letter, four digits, slash, two-digit year
fn is_icao_series_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 8
        && bytes[0].is_ascii_uppercase()
        && bytes[1..5].iter().all(u8::is_ascii_digit)
        && bytes[5] == b'/'
        && bytes[6..8].iter().all(u8::is_ascii_digit)
}

fn is_notam_number(token: &str) -> bool {
    is_domestic_number(token) || is_icao_series_number(token)
}

/// Strings handed over by the fetch/parse collaborators for one NOTAM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNotam {
    /// Full raw NOTAM text
    pub raw_text: String,
    /// ICAO-format text carrying the `Q)` line
    pub icao_message: Option<String>,
    /// Free-text message body
    pub message: Option<String>,
    /// Issue date, `MM/DD/YYYY HHmm[ EST]`
    pub issued: Option<String>,
    /// Effective start date
    pub start: Option<String>,
    /// Expiration date, or `PERM`
    pub end: Option<String>,
    /// Facility designator (airport or NAVAID)
    pub facility: String,
    /// Feature hint such as `Procedure`
    pub feature: Option<String>,
}

impl RawNotam {
    /// Zip station designators and message bodies that were scanned independently
    ///
    /// Both lists are expected to be index aligned. When the counts differ the
    /// shorter side is padded with empty strings so every record still builds
    /// and falls through the "no pattern found" paths.
    pub fn pair(stations: Vec<String>, messages: Vec<String>) -> Vec<RawNotam> {
        if stations.len() != messages.len() {
            warn!(
                "station/message count mismatch ({} vs {}), padding with empty values",
                stations.len(),
                messages.len()
            );
        }

        let len = stations.len().max(messages.len());
        let mut stations = stations.into_iter();
        let mut messages = messages.into_iter();

        (0..len)
            .map(|_| {
                let facility = stations.next().unwrap_or_default();
                let message = messages.next().unwrap_or_default();
                RawNotam {
                    raw_text: message.clone(),
                    message: Some(message),
                    facility,
                    ..RawNotam::default()
                }
            })
            .collect()
    }
}

/// A parsed notice, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotamRecord {
    pub id: NotamId,
    pub facility: String,
    pub raw_text: String,
    pub icao_message: Option<String>,
    pub message: String,
    /// Message with FAA contractions spelled out, for display
    pub expanded_message: String,
    pub notam_type: NotamType,
    pub created: Option<Timestamp>,
    /// Missing means "in effect since the distant past"
    pub effective: Option<Timestamp>,
    /// Missing means "in effect until the distant future"
    pub expiration: Option<Timestamp>,
    /// Message contains a closure/outage "red word"
    pub has_warnings: bool,
    pub flag: Option<Flag>,
}

impl NotamRecord {
    /// Build a record from collaborator-supplied strings
    ///
    /// Never fails: unusable inputs fall back to their "always"/absent
    /// defaults and are reported through `warnings`.
    pub fn build(raw: &RawNotam, warnings: &mut Vec<Warning>) -> Self {
        let id = NotamId::parse(&raw.raw_text, &raw.facility);

        let icao_message = raw
            .icao_message
            .as_deref()
            .filter(|text| !text.trim().is_empty());
        if icao_message.is_none() {
            warnings.push(Warning::MissingIcaoMessage);
        }
        let notam_type = classify(icao_message, &raw.raw_text, raw.feature.as_deref());

        let message = raw.message.as_deref().unwrap_or_default();
        let flag = if message.trim().is_empty() {
            warnings.push(Warning::MissingMessage);
            None
        } else {
            extract_flag(message, notam_type, &raw.facility)
                .map(|flag| flag.with_notam_id(id.clone()))
        };

        let expanded_message = expand_contractions(message);
        let has_warnings = has_warnings(&expanded_message);

        let created = parse_notam_date_lenient("issued", raw.issued.as_deref(), warnings);
        let effective = parse_notam_date_lenient("start", raw.start.as_deref(), warnings);
        let expiration = parse_notam_date_lenient("end", raw.end.as_deref(), warnings);

        debug!(
            "built NOTAM {id}: type={notam_type}, flag={:?}, warnings={has_warnings}",
            flag.as_ref().map(|flag| flag.kind)
        );

        Self {
            id,
            facility: raw.facility.clone(),
            raw_text: raw.raw_text.clone(),
            icao_message: icao_message.map(str::to_string),
            message: message.to_string(),
            expanded_message,
            notam_type,
            created,
            effective,
            expiration,
            has_warnings,
            flag,
        }
    }
}
