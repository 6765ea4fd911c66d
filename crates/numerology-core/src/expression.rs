use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{HANGUL_MODULUS, HANGUL_SYLLABLE_END, HANGUL_SYLLABLE_START};
use crate::reduce::reduce;

static NON_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Z가-힣]").unwrap());

/// Value a single character contributes to the expression sum.
/// Latin: A=1 … Z=26. Hangul syllable: `(cp - 0xAC00) % 19 + 1`.
/// Everything else contributes nothing.
pub fn letter_value(c: char) -> Option<u32> {
    let cp = c as u32;
    match c {
        'A'..='Z' => Some(cp - 'A' as u32 + 1),
        _ if (HANGUL_SYLLABLE_START..=HANGUL_SYLLABLE_END).contains(&cp) => {
            Some((cp - HANGUL_SYLLABLE_START) % HANGUL_MODULUS + 1)
        }
        _ => None,
    }
}

/// Uppercase, then drop every character that is neither A–Z nor a Hangul syllable.
/// Uppercasing happens first, so `ß` becomes `SS` and counts.
pub fn significant_letters(name: &str) -> String {
    NON_LETTER.replace_all(&name.to_uppercase(), "").into_owned()
}

/// Unreduced letter sum of a name.
pub fn letter_sum(name: &str) -> u64 {
    significant_letters(name)
        .chars()
        .filter_map(letter_value)
        .map(u64::from)
        .sum()
}

/// Expression number for a name.
///
/// `None` when the name is empty after trimming. `Some(0)` when nothing in
/// it contributes (digits, punctuation, other scripts): callers treat that
/// as an invalid name.
pub fn expression_number(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(reduce(letter_sum(name)))
}
