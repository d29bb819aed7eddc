//! Answer matching: decide whether typed text names the right country.
//!
//! Comparison is case-insensitive, diacritic-insensitive, and trimmed,
//! but otherwise literal: punctuation such as apostrophes must match
//! the catalog spelling.

use unicode_normalization::UnicodeNormalization;

use crate::types::{CountryRecord, QuizItem};

/// Canonicalize a string for comparison: trim surrounding whitespace,
/// lowercase, then decompose accented characters and drop the combining
/// marks so "Côte" and "cote" compare equal.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// The ordered list of normalized strings accepted for a record under
/// the given language.
///
/// A missing language entry fails closed: no other language is
/// substituted. The short form, when present, is accepted regardless
/// of the active language.
pub fn accepted_answers(record: &CountryRecord, language: &str) -> Vec<String> {
    let mut accepted = Vec::with_capacity(2);
    if let Some(name) = record.name(language) {
        accepted.push(normalize(name));
    }
    if let Some(short) = record.short_form.as_deref() {
        accepted.push(normalize(short));
    }
    accepted
}

/// Pure correctness predicate for an item's current answer buffer.
///
/// Never mutates anything; scoring and removal are orchestrated by the
/// engine. An empty candidate never matches, even if the accepted list
/// somehow contains an empty string.
pub fn is_correct(item: &QuizItem, language: &str) -> bool {
    let candidate = normalize(&item.user_answer);
    if candidate.is_empty() {
        return false;
    }
    accepted_answers(&item.record, language)
        .iter()
        .any(|accepted| *accepted == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn ivory_coast() -> CountryRecord {
        let mut names = BTreeMap::new();
        names.insert("en".to_string(), "Ivory Coast".to_string());
        names.insert("fr".to_string(), "Côte d'Ivoire".to_string());
        CountryRecord::new(names, "\u{1F1E8}\u{1F1EE}")
    }

    fn typed(record: CountryRecord, answer: &str) -> QuizItem {
        let mut item = QuizItem::new(record);
        item.user_answer = answer.to_string();
        item
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  United Kingdom  "), "united kingdom");
    }

    #[test]
    fn normalize_strips_diacritics() {
        assert_eq!(normalize("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(normalize("États-Unis"), "etats-unis");
        assert_eq!(normalize("Curaçao"), "curacao");
    }

    #[test]
    fn accent_and_case_variants_match() {
        for answer in ["cote d'ivoire", "CÔTE D'IVOIRE", " côte d'ivoire "] {
            assert!(is_correct(&typed(ivory_coast(), answer), "fr"), "{answer:?}");
        }
    }

    #[test]
    fn apostrophes_are_literal() {
        assert!(!is_correct(&typed(ivory_coast(), "cote d ivoire"), "fr"));
        assert!(!is_correct(&typed(ivory_coast(), "cote divoire"), "fr"));
    }

    #[test]
    fn empty_answer_never_matches() {
        assert!(!is_correct(&typed(ivory_coast(), ""), "fr"));
        assert!(!is_correct(&typed(ivory_coast(), "   "), "fr"));
    }

    #[test]
    fn missing_language_fails_closed() {
        // "de" is absent from the catalog entry, so nothing matches,
        // not even the other languages' names.
        assert!(!is_correct(&typed(ivory_coast(), "Côte d'Ivoire"), "de"));
        assert!(!is_correct(&typed(ivory_coast(), "Ivory Coast"), "de"));
    }

    #[test]
    fn wrong_language_name_is_rejected() {
        assert!(!is_correct(&typed(ivory_coast(), "Ivory Coast"), "fr"));
        assert!(is_correct(&typed(ivory_coast(), "ivory coast"), "en"));
    }

    #[test]
    fn short_form_matches_in_any_language() {
        let record = ivory_coast().with_short_form("CIV");
        assert!(is_correct(&typed(record.clone(), "civ"), "fr"));
        assert!(is_correct(&typed(record.clone(), " CIV "), "en"));
        // Even under an unknown language code.
        assert!(is_correct(&typed(record, "civ"), "de"));
    }

    #[test]
    fn accepted_answers_orders_name_before_short_form() {
        let record = ivory_coast().with_short_form("CIV");
        assert_eq!(
            accepted_answers(&record, "fr"),
            vec!["cote d'ivoire".to_string(), "civ".to_string()]
        );
        // Missing language leaves only the short form.
        assert_eq!(accepted_answers(&record, "de"), vec!["civ".to_string()]);
    }
}
