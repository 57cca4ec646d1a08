//! Accent and case folding for property text search.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercases `text` and strips combining diacritical marks.
///
/// Decomposes to NFD, drops the combining marks, recomposes to NFC, then
/// lowercases with the locale-invariant mapping. Empty and whitespace-only
/// input collapse to the empty string.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

/// Builds a regex fragment matching `term` as a substring, ignoring accents
/// and case.
///
/// Vowels, `n`, and `c` expand to character classes covering their common
/// accented variants, whitespace matches any whitespace run, and every other
/// character is escaped literally. The fragment is meant to be applied
/// case-insensitively (`~*` in Postgres). Empty or whitespace-only input
/// yields the empty string, meaning no constraint.
pub fn build_insensitive_pattern(term: &str) -> String {
    let normalized = normalize(term);
    let mut pattern = String::new();

    for c in normalized.chars() {
        match c {
            'a' => pattern.push_str("[aáàäâã]"),
            'e' => pattern.push_str("[eéèëê]"),
            'i' => pattern.push_str("[iíìïî]"),
            'o' => pattern.push_str("[oóòöôõ]"),
            'u' => pattern.push_str("[uúùüû]"),
            'n' => pattern.push_str("[nñ]"),
            'c' => pattern.push_str("[cç]"),
            c if c.is_whitespace() => pattern.push_str("\\s+"),
            c => pattern.push_str(&regex::escape(&c.to_string())),
        }
    }

    pattern
}
