//! Character and setting extraction.

mod characters;
mod setting;
mod tagger;

pub use characters::{extract_characters, MAIN_CHARACTER};
pub use tagger::{
    EntityCategory, EntityTagger, GazetteerTagger, TaggedEntity, TaggerCapability, TaggerError,
};

/// Setting returned when nothing is detected, unless configured otherwise.
pub const DEFAULT_SETTING_SENTINEL: &str = "general location";

/// Extracts characters and setting from a description.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    tagger: TaggerCapability,
    sentinel: String,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(TaggerCapability::Absent, DEFAULT_SETTING_SENTINEL)
    }
}

impl EntityExtractor {
    pub fn new(tagger: TaggerCapability, sentinel: impl Into<String>) -> Self {
        Self {
            tagger,
            sentinel: sentinel.into(),
        }
    }

    /// Character labels, never empty.
    pub fn extract_characters(&self, description: &str) -> Vec<String> {
        extract_characters(description)
    }

    /// Setting phrase, or the configured sentinel when nothing is found.
    pub fn extract_setting(&self, description: &str) -> String {
        setting::detect_setting(description, &self.tagger).unwrap_or_else(|| self.sentinel.clone())
    }

    pub fn tagger(&self) -> &TaggerCapability {
        &self.tagger
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}
