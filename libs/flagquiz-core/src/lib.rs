//! Core quiz engine for the flag quiz, shared by every frontend.
//!
//! Provides:
//! - The catalog data model (country records with multi-language names)
//! - Deck lifecycle: load, shuffle, navigate, retire, reset
//! - Answer matching (case- and diacritic-insensitive, language-aware)
//! - Score and progress bookkeeping
//!
//! The engine is synchronous and single-threaded by contract: frontends
//! serialize calls into it from one event loop and own all timing
//! concerns (transition delays, delayed removals).

pub mod catalog;
pub mod engine;
pub mod error;
pub mod matching;
pub mod types;

pub use catalog::{builtin, validate};
pub use engine::QuizEngine;
pub use error::{QuizError, Result};
pub use matching::{accepted_answers, is_correct, normalize};
pub use types::{CountryRecord, EngineConfig, QuizItem, ScoringMode, SubmissionResult};
