//! Catalog boundary: record validation and the built-in country list.
//!
//! The engine assumes validated input; everything that can be wrong
//! with a catalog is rejected here, before a deck is built.

use std::collections::{BTreeMap, HashSet};

use crate::error::{QuizError, Result};
use crate::types::CountryRecord;

/// Check a catalog before it reaches the engine.
///
/// Rejects an empty catalog (the strict-load policy for frontends that
/// need at least one card to render), records with no name entries, and
/// repeated ids, which would break deck uniqueness.
pub fn validate(records: Vec<CountryRecord>) -> Result<Vec<CountryRecord>> {
    if records.is_empty() {
        return Err(QuizError::EmptyCatalog);
    }
    let mut seen_ids = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.names.is_empty() {
            return Err(QuizError::NoNames { index });
        }
        if !seen_ids.insert(record.id) {
            return Err(QuizError::DuplicateId { id: record.id });
        }
    }
    Ok(records)
}

fn country(en: &str, fr: &str, flag: &str) -> CountryRecord {
    let mut names = BTreeMap::new();
    names.insert("en".to_string(), en.to_string());
    names.insert("fr".to_string(), fr.to_string());
    CountryRecord::new(names, flag)
}

/// The stock deck: fifteen countries with English and French names.
pub fn builtin() -> Vec<CountryRecord> {
    vec![
        country("France", "France", "\u{1F1EB}\u{1F1F7}"),
        country("Germany", "Allemagne", "\u{1F1E9}\u{1F1EA}"),
        country("Spain", "Espagne", "\u{1F1EA}\u{1F1F8}"),
        country("Italy", "Italie", "\u{1F1EE}\u{1F1F9}"),
        country("United Kingdom", "Royaume-Uni", "\u{1F1EC}\u{1F1E7}").with_short_form("UK"),
        country("United States", "États-Unis", "\u{1F1FA}\u{1F1F8}").with_short_form("USA"),
        country("Canada", "Canada", "\u{1F1E8}\u{1F1E6}"),
        country("Japan", "Japon", "\u{1F1EF}\u{1F1F5}"),
        country("China", "Chine", "\u{1F1E8}\u{1F1F3}"),
        country("Brazil", "Brésil", "\u{1F1E7}\u{1F1F7}"),
        country("Australia", "Australie", "\u{1F1E6}\u{1F1FA}"),
        country("India", "Inde", "\u{1F1EE}\u{1F1F3}"),
        country("Russia", "Russie", "\u{1F1F7}\u{1F1FA}"),
        country("South Korea", "Corée du Sud", "\u{1F1F0}\u{1F1F7}"),
        country("Mexico", "Mexique", "\u{1F1F2}\u{1F1FD}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_validates() {
        let records = validate(builtin()).unwrap();
        assert_eq!(records.len(), 15);
        assert!(records.iter().all(|r| r.name("en").is_some() && r.name("fr").is_some()));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(validate(Vec::new()), Err(QuizError::EmptyCatalog));
    }

    #[test]
    fn record_without_names_is_rejected() {
        let mut records = builtin();
        records[3].names.clear();
        assert_eq!(validate(records), Err(QuizError::NoNames { index: 3 }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = builtin();
        let dup = records[0].id;
        records[4].id = dup;
        assert_eq!(validate(records), Err(QuizError::DuplicateId { id: dup }));
    }
}
