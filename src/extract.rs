//! Flag extraction from NOTAM message text
//!
//! A single left-to-right pass over the message tokens with up to four tokens
//! of lookahead. Each aerodrome, runway and NAVAID keyword is checked against
//! the closure/outage phrasing that follows it.

use crate::types::{Flag, FlagKind, NotamType};
use crate::utils::text::{tokenize, trim_punctuation};
use log::{debug, trace};

const AERODROME_WORDS: [&str; 3] = ["AERODROME", "AERODOME", "AD"];
const RUNWAY_WORDS: [&str; 2] = ["RWY", "RUNWAY"];
const CLOSURE_WORDS: [&str; 2] = ["CLSD", "CLOSED"];
const OUTAGE_WORDS: [&str; 4] = ["U/S", "OTS", "OUT", "UNSERVICEABLE"];
const WET_WORD: &str = "WET";

fn is_closure(word: &str) -> bool {
    CLOSURE_WORDS.contains(&word)
}

fn is_outage(word: &str) -> bool {
    OUTAGE_WORDS.contains(&word)
}

fn is_runway_word(word: &str) -> bool {
    RUNWAY_WORDS.contains(&word)
}

/// One runway end: `1`..`36`, optionally suffixed `L`, `C` or `R`
fn is_runway_end(text: &str) -> bool {
    let digits = text.trim_end_matches(['L', 'C', 'R']);
    if digits.is_empty() || digits.len() > 2 || text.len() - digits.len() > 1 {
        return false;
    }
    digits
        .parse::<u8>()
        .is_ok_and(|number| (1..=36).contains(&number))
}

/// Runway ident from a token
///
/// The whole pair (`15/33`, `09L/27R`) is preferred and kept literally; a
/// single end (`15`) is used when that is all the message gives.
pub fn runway_ident(word: &str) -> Option<&str> {
    match word.split_once('/') {
        Some((first, second)) if is_runway_end(first) && is_runway_end(second) => Some(word),
        Some(_) => None,
        None if is_runway_end(word) => Some(word),
        None => None,
    }
}

/// Token window anchored at the current scan position
struct Lookahead<'a, 'w> {
    words: &'a [&'w str],
    pos: usize,
}

impl<'w> Lookahead<'_, 'w> {
    fn at(&self, offset: usize) -> Option<&'w str> {
        self.words.get(self.pos + offset).copied()
    }

    fn is(&self, offset: usize, predicate: impl Fn(&str) -> bool) -> bool {
        self.at(offset).is_some_and(predicate)
    }
}

/// Extract every flag the message describes, in scan order
pub fn extract_all_flags(message: &str, notam_type: NotamType, facility: &str) -> Vec<Flag> {
    let tokens = tokenize(message);
    let words: Vec<&str> = tokens.iter().map(|token| trim_punctuation(token)).collect();
    let is_wet = words.contains(&WET_WORD);
    let navaid = (!facility.is_empty()).then_some(facility);

    let mut flags = Vec::new();
    for pos in 0..words.len() {
        let ahead = Lookahead {
            words: &words,
            pos,
        };
        let word = words[pos];

        let flag = if AERODROME_WORDS.contains(&word) {
            aerodrome_flag(&ahead, message)
        } else if is_runway_word(word) {
            runway_flag(&ahead, message, notam_type, is_wet)
        } else if word == "ILS" {
            ils_flag(&ahead, message)
        } else if word == "TACAN" {
            tacan_flag(&ahead, message, notam_type, navaid)
        } else if word == "VORTAC" {
            vortac_flag(&ahead, message, notam_type, navaid)
        } else {
            None
        };

        if let Some(flag) = flag {
            trace!("token {pos} ({word}) matched {:?}", flag.kind);
            flags.push(flag);
        }
    }
    flags
}

/// Extract the flag for a message
///
/// When several conditions match, the last one in scan order wins: a message
/// closing a runway and then reporting an ILS outage yields the ILS flag.
/// Use [`extract_all_flags`] to see every match.
pub fn extract_flag(message: &str, notam_type: NotamType, facility: &str) -> Option<Flag> {
    let flag = extract_all_flags(message, notam_type, facility).pop();
    debug!("extracted {:?} from {message:?}", flag.as_ref().map(|flag| flag.kind));
    flag
}

fn aerodrome_flag(ahead: &Lookahead<'_, '_>, message: &str) -> Option<Flag> {
    (ahead.is(1, is_closure) || ahead.is(2, is_closure))
        .then(|| Flag::new(FlagKind::AerodromeClosed, message))
}

fn runway_flag(
    ahead: &Lookahead<'_, '_>,
    message: &str,
    notam_type: NotamType,
    is_wet: bool,
) -> Option<Flag> {
    if notam_type == NotamType::Taxiway {
        return None;
    }

    let ident = ahead.at(1).and_then(runway_ident);
    if let Some(ident) = ident {
        if ahead.is(2, is_closure) {
            return Some(Flag::new(FlagKind::RunwayClosed, message).with_ident(ident));
        }
    }

    if is_wet {
        let flag = Flag::new(FlagKind::RunwayWet, message);
        return Some(match ident {
            Some(ident) => flag.with_ident(ident),
            None => flag,
        });
    }
    None
}

fn ils_flag(ahead: &Lookahead<'_, '_>, message: &str) -> Option<Flag> {
    if !ahead.is(1, is_runway_word) {
        return None;
    }
    let ident = ahead.at(2)?;

    if ahead.is(3, is_outage) {
        Some(Flag::new(FlagKind::IlsOutage, message).with_ident(ident))
    } else if ahead.is(4, is_outage) {
        let subtype = ahead.at(3)?;
        Some(
            Flag::new(FlagKind::IlsSubtypeOutage, message)
                .with_ident(ident)
                .with_subtype(subtype),
        )
    } else {
        None
    }
}

fn tacan_flag(
    ahead: &Lookahead<'_, '_>,
    message: &str,
    notam_type: NotamType,
    navaid: Option<&str>,
) -> Option<Flag> {
    if ahead.is(1, is_runway_word) {
        let ident = ahead.at(2)?;
        return ahead.is(3, is_outage).then(|| {
            Flag::new(FlagKind::TacanApproachOutage, message).with_ident(ident)
        });
    }

    // Outages of a procedure's TACAN are approach matters, not NAVAID outages
    if notam_type == NotamType::Procedure {
        return None;
    }

    let flag = if ahead.is(1, is_outage) {
        Flag::new(FlagKind::TacanNavOutage, message)
    } else if ahead.is(2, is_outage) {
        Flag::new(FlagKind::TacanNavOutage, message).with_subtype(ahead.at(1)?)
    } else {
        return None;
    };
    Some(with_navaid(flag, navaid))
}

fn vortac_flag(
    ahead: &Lookahead<'_, '_>,
    message: &str,
    notam_type: NotamType,
    navaid: Option<&str>,
) -> Option<Flag> {
    if notam_type == NotamType::Procedure {
        return None;
    }

    let flag = if ahead.is(1, is_outage) {
        Flag::new(FlagKind::VortacOutage, message)
    } else if ahead.is(2, is_outage) {
        Flag::new(FlagKind::VortacOutage, message).with_subtype(ahead.at(1)?)
    } else {
        return None;
    };
    Some(with_navaid(flag, navaid))
}

fn with_navaid(flag: Flag, navaid: Option<&str>) -> Flag {
    match navaid {
        Some(navaid) if flag.kind.is_navaid() => flag.with_ident(navaid),
        _ => flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some, assert_some_eq};
    use insta::assert_compact_debug_snapshot;

    fn kind(message: &str, notam_type: NotamType) -> Option<FlagKind> {
        extract_flag(message, notam_type, "DCA").map(|flag| flag.kind)
    }

    #[test]
    fn runway_ident_forms() {
        assert_some_eq!(runway_ident("15/33"), "15/33");
        assert_some_eq!(runway_ident("09L/27R"), "09L/27R");
        assert_some_eq!(runway_ident("4"), "4");
        assert_some_eq!(runway_ident("36C"), "36C");
        assert_none!(runway_ident("37"));
        assert_none!(runway_ident("00"));
        assert_none!(runway_ident("15LR"));
        assert_none!(runway_ident("A/B"));
        assert_none!(runway_ident("15/"));
        assert_none!(runway_ident("CLSD"));
    }

    #[test]
    fn aerodrome_closed() {
        assert_some_eq!(kind("AD CLSD", NotamType::Airport), FlagKind::AerodromeClosed);
        assert_some_eq!(
            kind("AERODROME CLSD 1 JUL 0700Z - 5 JUL 1300Z", NotamType::Airport),
            FlagKind::AerodromeClosed
        );
        assert_some_eq!(
            kind("AERODOME CLOSED. EXC PPR", NotamType::Airport),
            FlagKind::AerodromeClosed
        );
        assert_some_eq!(kind("ad ap clsd", NotamType::Unknown), FlagKind::AerodromeClosed);
        assert_none!(kind("AD TO NON-TRANSIENT TFC CLSD", NotamType::Airport));
    }

    #[test]
    fn runway_closed_with_ident() {
        let flag = extract_flag("RWY 15/33 CLSD", NotamType::Runway, "DCA").unwrap();
        assert_eq!(flag.kind, FlagKind::RunwayClosed);
        assert_eq!(flag.ident.as_deref(), Some("15/33"));
        assert_eq!(flag.message, "RWY 15/33 CLSD");

        let flag = extract_flag("RUNWAY 4 CLOSED.", NotamType::Runway, "DCA").unwrap();
        assert_eq!(flag.ident.as_deref(), Some("4"));
    }

    #[test]
    fn runway_closed_needs_closure_right_after_ident() {
        assert_none!(kind("RWY 15/33 EDGE LGT U/S", NotamType::Runway));
    }

    #[test]
    fn runway_wet() {
        let flag = extract_flag("RWY 15/33 WET", NotamType::Runway, "DCA").unwrap();
        assert_eq!(flag.kind, FlagKind::RunwayWet);
        assert_eq!(flag.ident.as_deref(), Some("15/33"));

        let flag = extract_flag("RWY FICON WET OBS AT 1200Z", NotamType::Runway, "DCA").unwrap();
        assert_eq!(flag.kind, FlagKind::RunwayWet);
        assert_none!(flag.ident);
    }

    #[test]
    fn taxiway_notices_never_flag_runways() {
        assert_none!(kind("TWY A BTN RWY 15/33 CLSD", NotamType::Taxiway));
        assert_none!(kind("TWY A NEAR RWY 15 WET", NotamType::Taxiway));
    }

    #[test]
    fn ils_outages() {
        let flag = extract_flag("ILS RWY 01 U/S", NotamType::Procedure, "DCA").unwrap();
        assert_eq!(flag.kind, FlagKind::IlsOutage);
        assert_eq!(flag.ident.as_deref(), Some("01"));
        assert_none!(flag.subtype.as_ref());

        let flag = extract_flag("ILS RWY 19 GS OTS.", NotamType::Procedure, "DCA").unwrap();
        assert_eq!(flag.kind, FlagKind::IlsSubtypeOutage);
        assert_eq!(flag.ident.as_deref(), Some("19"));
        assert_eq!(flag.subtype.as_deref(), Some("GS"));

        assert_some_eq!(
            kind("ILS RUNWAY 33 OUT OF SERVICE", NotamType::Unknown),
            FlagKind::IlsOutage
        );
        assert_none!(kind("ILS RWY 01 CAT II NA", NotamType::Procedure));
    }

    #[test]
    fn tacan_outages() {
        let flag = extract_flag("TACAN U/S", NotamType::None, "NHK").unwrap();
        assert_eq!(flag.kind, FlagKind::TacanNavOutage);
        assert_eq!(flag.ident.as_deref(), Some("NHK"));

        let flag = extract_flag("TACAN AZM UNSERVICEABLE", NotamType::None, "NHK").unwrap();
        assert_eq!(flag.kind, FlagKind::TacanNavOutage);
        assert_eq!(flag.subtype.as_deref(), Some("AZM"));

        let flag = extract_flag("TACAN RWY 32 OTS", NotamType::Procedure, "NHK").unwrap();
        assert_eq!(flag.kind, FlagKind::TacanApproachOutage);
        assert_eq!(flag.ident.as_deref(), Some("32"));

        assert_none!(kind("TACAN U/S", NotamType::Procedure));
    }

    #[test]
    fn vortac_outages() {
        let flag = extract_flag("VORTAC U/S", NotamType::None, "AML").unwrap();
        assert_eq!(flag.kind, FlagKind::VortacOutage);
        assert_eq!(flag.ident.as_deref(), Some("AML"));

        let flag = extract_flag("VORTAC DME OTS", NotamType::None, "").unwrap();
        assert_eq!(flag.subtype.as_deref(), Some("DME"));
        assert_none!(flag.ident);

        assert_none!(kind("VORTAC U/S", NotamType::Procedure));
        assert_none!(kind("VORTAC FREQ CHANGED TO 113.2", NotamType::None));
    }

    #[test]
    fn last_match_wins() {
        let message = "RWY 15/33 CLSD. ILS RWY 15 U/S";
        assert_some_eq!(kind(message, NotamType::Runway), FlagKind::IlsOutage);

        let all: Vec<_> = extract_all_flags(message, NotamType::Runway, "DCA")
            .into_iter()
            .map(|flag| flag.kind)
            .collect();
        assert_compact_debug_snapshot!(all, @"[RunwayClosed, IlsOutage]");
    }

    #[test]
    fn no_pattern_no_flag() {
        assert_none!(kind("", NotamType::Unknown));
        assert_none!(kind("OBST CRANE 250FT AGL", NotamType::Obstacle));
        assert_none!(kind("RWY", NotamType::Runway));
        assert_none!(kind("ILS RWY", NotamType::Procedure));
    }

    #[test]
    fn extraction_is_idempotent() {
        let message = "ILS RWY 19 GS OTS";
        let first = extract_flag(message, NotamType::Procedure, "DCA");
        assert_some!(first.as_ref());
        assert_eq!(first, extract_flag(message, NotamType::Procedure, "DCA"));
    }
}
