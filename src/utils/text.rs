use std::borrow::Cow;

/// Decode raw feed bytes to text
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252) if
/// UTF-8 fails. Some NOTAM feeds still deliver Extended ASCII (e.g. `°` in
/// obstacle notices), so this always succeeds with some valid string.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}

/// Split message text into uppercase whitespace-separated tokens
///
/// Literal newlines (and `\r`) are treated like any other whitespace so that
/// multi-line feed text yields the same token stream as its flattened form.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_ascii_uppercase())
        .collect()
}

/// Strip leading/trailing punctuation that free text tends to attach to words
///
/// `CLSD.` → `CLSD`, `(U/S),` → `U/S`. Slashes and hyphens are kept because
/// they carry meaning inside runway idents and time ranges.
pub fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '!' | '?'))
}

/// Keep only the ASCII digits of a token
pub fn digits(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

/// Parse exactly four ASCII digits as `HHMM` and return minutes of day
///
/// `2400` is accepted as end-of-day (1440). Anything else out of range is `None`.
pub fn parse_hhmm(text: &str) -> Option<u16> {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u16 = text[..2].parse().ok()?;
    let minute: u16 = text[2..].parse().ok()?;
    match (hour, minute) {
        (24, 0) => Some(24 * 60),
        (0..=23, 0..=59) => Some(hour * 60 + minute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_utf8_text() {
        assert_eq!(decode_text(b"RWY 15/33 CLSD"), "RWY 15/33 CLSD");
    }

    #[test]
    fn decode_cp1252_fallback() {
        // 0xB0 is `°` in CP1252 and not valid UTF-8 on its own
        let bytes = vec![b'2', b'7', b'0', 0xB0];
        assert_eq!(decode_text(&bytes), "270°");
    }

    #[test]
    fn tokenize_flattens_newlines() {
        let tokens = tokenize("rwy 15/33\nclsd\r\n  thu 0000-2359");
        assert_eq!(tokens, vec!["RWY", "15/33", "CLSD", "THU", "0000-2359"]);
    }

    #[test]
    fn tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n ").is_empty());
    }

    #[test]
    fn trim_punctuation_keeps_slashes() {
        assert_eq!(trim_punctuation("CLSD."), "CLSD");
        assert_eq!(trim_punctuation("(U/S),"), "U/S");
        assert_eq!(trim_punctuation("0700-1900."), "0700-1900");
        assert_eq!(trim_punctuation("..."), "");
    }

    #[test]
    fn digits_strips_everything_else() {
        assert_eq!(digits("1ST"), "1");
        assert_eq!(digits("(05)"), "05");
        assert_eq!(digits("JUL"), "");
    }

    #[test]
    fn parse_hhmm_ranges() {
        assert_eq!(parse_hhmm("0000"), Some(0));
        assert_eq!(parse_hhmm("0730"), Some(450));
        assert_eq!(parse_hhmm("2359"), Some(1439));
        assert_eq!(parse_hhmm("2400"), Some(1440));
        assert_eq!(parse_hhmm("2401"), None);
        assert_eq!(parse_hhmm("1260"), None);
        assert_eq!(parse_hhmm("730"), None);
        assert_eq!(parse_hhmm("07:3"), None);
    }
}
