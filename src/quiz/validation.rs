//! Accent- and case-insensitive answer checking.

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Canonical comparable form of an answer: lower-cased, diacritics removed,
/// surrounding whitespace trimmed. `"Hablé"` becomes `"hable"`.
///
/// Trimming runs last so a stray leading accent cannot shield whitespace.
pub fn normalize_spanish(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .collect();
    stripped.trim().to_string()
}

/// Internal whitespace is compared as-is: "ha hablado" and "ha  hablado" differ.
pub fn is_answer_correct(user_answer: &str, correct_answer: &str) -> bool {
    normalize_spanish(user_answer) == normalize_spanish(correct_answer)
}
