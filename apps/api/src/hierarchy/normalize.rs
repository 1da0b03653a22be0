//! Text normalization for title and division matching.
//!
//! Every title and division passes through [`normalize`] before it is stored,
//! compared, or matched against a keyword table.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical form of a title or division: uppercase, trimmed, accents stripped.
///
/// Total over any input; the empty string normalizes to itself.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Compatibility decomposition can yield lowercase letters (e.g. `ª` -> `a`),
    // so the case fold runs again after the marks are gone.
    let stripped: String = text
        .to_uppercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.to_uppercase().trim().to_string()
}

/// Normalizes an optional field, mapping absent and blank values to `None`.
pub fn normalize_opt(text: Option<&str>) -> Option<String> {
    text.map(normalize).filter(|s| !s.is_empty())
}

/// True when `keyword` occurs in `haystack` starting at a word boundary.
///
/// Only the left edge is checked, so feminine and plural forms still match
/// (`COORDINADOR` in `COORDINADORA`, `JEFE` in `JEFES`) while a keyword buried
/// inside another word does not (`GERENTE` in `SUBGERENTE`).
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    haystack.match_indices(keyword).any(|(start, _)| {
        haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

/// Whitespace-delimited tokens of already-normalized text.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
