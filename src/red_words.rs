//! "Red word" detection used to mark notices that report something unusable

use crate::utils::text::{tokenize, trim_punctuation};

/// Words that mark a closure or outage, in contracted and expanded form
const RED_WORDS: [&str; 9] = [
    "CLOSED",
    "CLSD",
    "UNSERVICEABLE",
    "OTS",
    "U/S",
    "UNUSBL",
    "UNUSABLE",
    "UNMNT",
    "UNMONITORED",
];

/// Whether `text` reports a closure or outage
///
/// Works on raw or contraction-expanded text. A bare `OUT` only counts as
/// part of `OUT OF SERVICE` (any word containing `SERVICE` after the `OF`),
/// so `OUT` in `RWY 15 OUT TO 3000FT` does not trigger.
pub fn has_warnings(text: &str) -> bool {
    let tokens = tokenize(text);
    let words: Vec<&str> = tokens.iter().map(|token| trim_punctuation(token)).collect();

    words.iter().enumerate().any(|(i, word)| {
        if RED_WORDS.contains(word) {
            return true;
        }
        *word == "OUT"
            && words.get(i + 1) == Some(&"OF")
            && words.get(i + 2).is_some_and(|next| next.contains("SERVICE"))
    })
}
