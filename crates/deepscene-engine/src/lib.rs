//! Keyword-weighted scene analysis.
//!
//! This crate turns a free-text scene description into a structured
//! `SceneResult`:
//! - Genre classification against a configurable lexicon, with a style per genre
//! - Mood classification with a bounded confidence score
//! - Character and setting extraction, optionally backed by an entity tagger
//! - Template dialogue and an image prompt for downstream generation
//!
//! Lexicons are loaded once and shared read-only. Analysis is synchronous,
//! allocation-light and safe to run from many threads on one analyzer.

pub mod analyzer;
pub mod config;
pub mod dialogue;
pub mod entities;
pub mod error;
pub mod fallback;
pub mod genre;
pub mod lexicon;
pub mod mood;
pub mod prompt;
pub mod scorer;
mod text;

pub use analyzer::{SceneAnalyzer, SceneAnalyzerBuilder};
pub use config::{EngineConfig, TaggerMode};
pub use dialogue::DialogueGenerator;
pub use entities::{
    EntityCategory, EntityExtractor, EntityTagger, GazetteerTagger, TaggedEntity,
    TaggerCapability, TaggerError,
};
pub use error::{EngineError, EngineResult};
pub use fallback::{FallbackPolicy, FallbackSite};
pub use genre::GenreClassifier;
pub use lexicon::{default_lexicon, Category, GenreEntry, Lexicon, PlaceEntry};
pub use mood::MoodClassifier;
pub use prompt::compose_prompt;
pub use scorer::{score, ScoreTable};
pub use text::clean_description;
