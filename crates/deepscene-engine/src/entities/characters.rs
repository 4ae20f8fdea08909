//! Character extraction from trigger words.

use crate::text::contains_any;

/// Trigger word → character label, scanned in order.
const CHARACTER_RULES: &[(&str, &str)] = &[
    ("man", "Man"),
    ("woman", "Woman"),
    ("person", "Person"),
    ("dancer", "Dancer"),
    ("detective", "Detective"),
    ("child", "Child"),
    ("kid", "Child"),
    ("friend", "Friend"),
];

const INVESTIGATION_WORDS: &[&str] = &["investigate", "crime", "mystery"];

/// Label used when nothing else applies.
pub const MAIN_CHARACTER: &str = "Main Character";

/// Character labels for a description. Never empty.
///
/// Triggers are substring matches, so "woman" also yields `Man`. Labels
/// keep the order of the rule table and appear once each.
pub fn extract_characters(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();

    let mut characters: Vec<String> = Vec::new();
    for (trigger, label) in CHARACTER_RULES {
        if lowered.contains(trigger) && !characters.iter().any(|c| c == label) {
            characters.push((*label).to_string());
        }
    }

    if characters.is_empty() {
        let fallback = if lowered.contains("dancing") {
            "Dancer"
        } else if contains_any(&lowered, INVESTIGATION_WORDS) {
            "Detective"
        } else {
            MAIN_CHARACTER
        };
        characters.push(fallback.to_string());
    }

    characters
}
