//! NOTAM type classification from the ICAO Q-code
//!
//! The Q-line looks like `Q) KZDC/QMRLC/IV/NBO/A/000/999/...`. The second and
//! third letters of the `QMRLC` group (`MR`, the subject) select the type.

use crate::types::NotamType;
use crate::utils::text::{tokenize, trim_punctuation};
use log::trace;

const BIRD_KEYWORDS: [&str; 3] = ["BASH", "BIRD", "BIRDS"];

/// Feature hint marking instrument procedure notices
pub const PROCEDURE_FEATURE: &str = "Procedure";

/// Locate the two-letter Q-code subject
///
/// Finds the `Q)` marker, then keeps scanning for the next `Q` that is
/// followed by at least two characters. A plain "first letters after `Q)`"
/// capture would pick up the FIR instead, and a stray lone `Q` ahead of the
/// marker must not be mistaken for the code.
pub fn q_code(icao_message: &str) -> Option<[char; 2]> {
    let chars: Vec<char> = icao_message.chars().map(|c| c.to_ascii_uppercase()).collect();

    let marker = chars.windows(2).position(|pair| pair[0] == 'Q' && pair[1] == ')')?;
    let mut pos = marker + 2;
    while pos + 2 < chars.len() {
        if chars[pos] == 'Q' {
            return Some([chars[pos + 1], chars[pos + 2]]);
        }
        pos += 1;
    }
    None
}

/// Classify a NOTAM
///
/// `Unknown` when there is no ICAO text or no Q-code in it, `None` when a
/// Q-code was found but no rule applies. Never fails.
pub fn classify(icao_message: Option<&str>, raw_text: &str, feature: Option<&str>) -> NotamType {
    let Some(icao_message) = icao_message.filter(|text| !text.trim().is_empty()) else {
        return NotamType::Unknown;
    };
    let Some(code) = q_code(icao_message) else {
        trace!("no Q-code found in {icao_message:?}");
        return NotamType::Unknown;
    };

    let is_procedure = feature.is_some_and(|feature| feature.eq_ignore_ascii_case(PROCEDURE_FEATURE));
    let notam_type = match code {
        ['W' | 'T', _] | ['R', 'T'] => NotamType::Tfr,
        ['M', 'R' | 'L' | 'T'] => NotamType::Runway,
        ['O', 'B' | 'L'] => NotamType::Obstacle,
        ['M', _] => NotamType::Taxiway,
        ['C' | 'F' | 'L' | 'N' | 'S', _] => NotamType::Airport,
        ['I' | 'P', _] => NotamType::Procedure,
        _ if is_procedure => NotamType::Procedure,
        ['A', _] => NotamType::Airspace,
        _ if mentions_birds(raw_text) || mentions_birds(icao_message) => NotamType::Birds,
        _ => NotamType::None,
    };

    trace!("Q-code {}{} classified as {notam_type}", code[0], code[1]);
    notam_type
}

fn mentions_birds(text: &str) -> bool {
    tokenize(text)
        .iter()
        .any(|token| BIRD_KEYWORDS.contains(&trim_punctuation(token)))
}
