//! Setting detection.
//!
//! A present entity tagger is asked first; the first place-like entity wins.
//! Otherwise, or when the tagger fails, a short list of preposition patterns
//! is tried in order over the lowercased description.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::tagger::TaggerCapability;

/// Preposition patterns, tried in order. Group 1 is the setting phrase.
static SETTING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Phrase ending in a venue noun
        Regex::new(
            r"\b(?:in|at|inside|on|through|outside|within)\s+(?:(?:a|an|the)\s+)?([^,.!?]+?(?:room|house|building|street|park|forest|beach|office|school|restaurant|bar|club|studio|stage|theater))\b",
        )
        .unwrap(),
        // Anything after a bare "in" or "at"
        Regex::new(r"\b(?:in|at)\s+(?:(?:a|an|the)\s+)?([^,.!?]+)").unwrap(),
        // Named roads
        Regex::new(
            r"\bon\s+(?:(?:a|an|the)\s+)?([^,.!?]+\s+(?:street|avenue|road|boulevard))\b",
        )
        .unwrap(),
    ]
});

/// Detect a setting, or `None` when nothing matches.
pub(crate) fn detect_setting(description: &str, tagger: &TaggerCapability) -> Option<String> {
    tagged_setting(description, tagger).or_else(|| pattern_setting(description))
}

fn tagged_setting(description: &str, capability: &TaggerCapability) -> Option<String> {
    let tagger = capability.tagger()?;

    match tagger.find_entities(description) {
        Ok(entities) => {
            let place = entities
                .iter()
                .filter(|e| e.category.is_place_like())
                .find_map(|e| e.text(description))
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty());

            if let Some(ref place) = place {
                debug!(tagger = tagger.name(), setting = %place, "Setting from tagged entity");
            }
            place
        }
        Err(e) => {
            warn!(
                tagger = tagger.name(),
                error = %e,
                "Entity tagger failed, using pattern fallback"
            );
            None
        }
    }
}

fn pattern_setting(description: &str) -> Option<String> {
    let lowered = description.to_lowercase();

    SETTING_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(&lowered)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|phrase| !phrase.is_empty())
    })
}
