//! Core types for the flag quiz engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable catalog entry: one country, its accepted names, and a flag.
///
/// The engine never inspects `flag`; it is an opaque display token
/// (a flag glyph for terminals, an image key for richer frontends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: Uuid,
    /// Accepted display names keyed by language code (e.g. `"en"`, `"fr"`).
    /// At least one entry; enforced by [`crate::catalog::validate`].
    pub names: BTreeMap<String, String>,
    /// Optional extra accepted answer (an abbreviation such as "UK"),
    /// accepted regardless of the active language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,
    pub flag: String,
}

impl CountryRecord {
    /// Create a record with a freshly generated id.
    pub fn new(names: BTreeMap<String, String>, flag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            names,
            short_form: None,
            flag: flag.into(),
        }
    }

    pub fn with_short_form(mut self, short_form: impl Into<String>) -> Self {
        self.short_form = Some(short_form.into());
        self
    }

    /// The accepted name for a language code, if the catalog carries one.
    pub fn name(&self, language: &str) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}

/// One deck slot for the duration of a quiz session: a record plus the
/// answer buffer the user is typing into.
///
/// Each item owns its buffer exclusively; removing the item discards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub record: CountryRecord,
    pub user_answer: String,
}

impl QuizItem {
    pub fn new(record: CountryRecord) -> Self {
        Self {
            record,
            user_answer: String::new(),
        }
    }
}

/// Whether correct answers accumulate a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Each id scores at most one point, retained after the item is removed.
    Cumulative,
    /// No score is kept; solved items are simply retired.
    None,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Cumulative
    }
}

/// Engine construction options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Language code answers are checked against, switchable at runtime.
    pub language: String,
    pub scoring_mode: ScoringMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: "fr".to_string(),
            scoring_mode: ScoringMode::default(),
        }
    }
}

/// Outcome of a submission, returned to the presentation layer.
///
/// The engine only reports correctness; retiring the item (with whatever
/// transition delay the frontend wants) is the caller's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(en: &str) -> CountryRecord {
        let mut names = BTreeMap::new();
        names.insert("en".to_string(), en.to_string());
        CountryRecord::new(names, "??")
    }

    #[test]
    fn new_records_get_distinct_ids() {
        assert_ne!(record("France").id, record("France").id);
    }

    #[test]
    fn name_lookup_is_per_language() {
        let r = record("Germany");
        assert_eq!(r.name("en"), Some("Germany"));
        assert_eq!(r.name("fr"), None);
    }

    #[test]
    fn records_compare_by_value() {
        let r = record("United Kingdom").with_short_form("UK");
        assert_eq!(r.clone(), r);
        assert_ne!(r.clone().with_short_form("GB"), r);
    }

    #[test]
    fn short_form_round_trips_through_serde() {
        let r = record("United Kingdom").with_short_form("UK");
        let json = serde_json::to_string(&r).unwrap();
        let back: CountryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.short_form.as_deref(), Some("UK"));
        assert_eq!(back.id, r.id);
    }

    #[test]
    fn default_config_is_french_cumulative() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.language, "fr");
        assert_eq!(cfg.scoring_mode, ScoringMode::Cumulative);
    }
}
