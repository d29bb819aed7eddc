//! The quiz engine: shuffled deck, current position, scoring, and the
//! submission path that ties them to answer matching.
//!
//! Every operation is synchronous and runs to completion; the engine
//! holds no locks and schedules no timers. Frontends that fade a card
//! out before retiring it own that delay themselves and call
//! [`QuizEngine::remove`] when it elapses (`remove` is idempotent, so a
//! double-scheduled removal is safe).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::error::{QuizError, Result};
use crate::matching;
use crate::types::{CountryRecord, EngineConfig, QuizItem, ScoringMode, SubmissionResult};

/// Mutable root of one quiz session.
///
/// Deck order is shuffled once per load/reset and otherwise stable
/// except for removals. Ids in the deck are unique (guaranteed by
/// [`crate::catalog::validate`] at the load boundary).
#[derive(Debug, Clone)]
pub struct QuizEngine {
    deck: Vec<QuizItem>,
    /// Meaningful only while the deck is non-empty; see [`Self::current_index`].
    current: usize,
    language: String,
    scoring_mode: ScoringMode,
    answered_ids: HashSet<Uuid>,
    score: u32,
}

impl QuizEngine {
    /// Build a session from validated records, shuffling with thread-local
    /// entropy.
    ///
    /// Never fails: an empty record list yields a session that is already
    /// complete. Callers that want to treat that as an error validate
    /// through [`crate::catalog::validate`] first.
    pub fn new(records: Vec<CountryRecord>, config: EngineConfig) -> Self {
        Self::with_rng(records, config, &mut rand::thread_rng())
    }

    /// Build a session with an injected random source, so tests can seed
    /// the shuffle and replay it.
    pub fn with_rng<R: Rng>(records: Vec<CountryRecord>, config: EngineConfig, rng: &mut R) -> Self {
        let mut engine = Self {
            deck: Vec::new(),
            current: 0,
            language: config.language,
            scoring_mode: config.scoring_mode,
            answered_ids: HashSet::new(),
            score: 0,
        };
        engine.rebuild_deck(records, rng);
        engine
    }

    fn rebuild_deck<R: Rng>(&mut self, records: Vec<CountryRecord>, rng: &mut R) {
        self.deck = records.into_iter().map(QuizItem::new).collect();
        self.deck.shuffle(rng);
        self.current = 0;
        self.answered_ids.clear();
        self.score = 0;
    }

    /// Number of items still in the deck.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// True once every item has been retired.
    pub fn is_complete(&self) -> bool {
        self.deck.is_empty()
    }

    /// Position of the current item, or `None` once the deck is empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.current_index().map(|i| &self.deck[i])
    }

    /// Deck contents in play order, for frontends that render every card.
    pub fn items(&self) -> impl Iterator<Item = &QuizItem> {
        self.deck.iter()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Distinct ids answered correctly this session.
    pub fn answered_count(&self) -> usize {
        self.answered_ids.len()
    }

    /// Move to the next item; no-op at the end of the deck.
    pub fn advance(&mut self) {
        if self.current + 1 < self.deck.len() {
            self.current += 1;
        }
    }

    /// Move to the previous item; no-op at the front.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Retire an item from the deck. Unknown ids are a no-op, so
    /// double-scheduled removals are safe.
    ///
    /// The current index keeps denoting the same item when an earlier
    /// one is removed, and is clamped back into bounds otherwise.
    pub fn remove(&mut self, id: Uuid) {
        let Some(pos) = self.deck.iter().position(|item| item.record.id == id) else {
            return;
        };
        self.deck.remove(pos);
        if pos < self.current {
            self.current -= 1;
        }
        if !self.deck.is_empty() && self.current >= self.deck.len() {
            self.current = self.deck.len() - 1;
        }
    }

    /// Record `text` as the item's answer buffer and evaluate it against
    /// the active language.
    ///
    /// Frontends call this on every text change, not just on enter, so
    /// correctness is evaluated continuously. Matching is per-item: the
    /// item does not have to be the current one. In cumulative scoring
    /// mode each id is worth at most one point for the whole session.
    ///
    /// Fails with [`QuizError::UnknownItem`] when the id is no longer in
    /// the deck; callers treat that as "ignore, state already advanced".
    pub fn submit_answer(&mut self, id: Uuid, text: impl Into<String>) -> Result<SubmissionResult> {
        let item = self
            .deck
            .iter_mut()
            .find(|item| item.record.id == id)
            .ok_or(QuizError::UnknownItem { id })?;
        item.user_answer = text.into();

        let correct = matching::is_correct(item, &self.language);
        if correct && self.scoring_mode == ScoringMode::Cumulative && self.answered_ids.insert(id) {
            self.score += 1;
        }
        Ok(SubmissionResult { correct })
    }

    /// Switch the comparison language. Touches nothing else: answers
    /// already on the board are not re-evaluated, and an unknown code
    /// simply makes subsequent matching fail closed.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
    }

    /// Restart the session in place: reshuffle, rewind to the front, and
    /// clear score, answered set, and every answer buffer.
    pub fn reset(&mut self, fresh_records: Option<Vec<CountryRecord>>) {
        self.reset_with_rng(fresh_records, &mut rand::thread_rng());
    }

    /// [`Self::reset`] with an injected random source.
    pub fn reset_with_rng<R: Rng>(&mut self, fresh_records: Option<Vec<CountryRecord>>, rng: &mut R) {
        let records = match fresh_records {
            Some(records) => records,
            None => self.deck.drain(..).map(|item| item.record).collect(),
        };
        self.rebuild_deck(records, rng);
    }
}
