//! Template dialogue lines.

use crate::fallback::{FallbackPolicy, FallbackSite};

pub const DANCE_LINE: &str = "\"I love this song! Let's dance!\" they shouted over the music.";
pub const CONFRONTATION_LINE: &str = "\"You'll never get away with this!\" the hero declared.";
pub const ROMANCE_LINE: &str =
    "\"I've never felt this way about anyone before,\" they whispered.";

/// Generic lines for descriptions without a matching trigger.
pub const GENERIC_LINES: &[&str] = &[
    "\"This is quite a situation,\" one character remarked, looking around.",
    "\"I can't believe we're here,\" said another, shaking their head.",
    "\"What should we do now?\" someone asked nervously.",
    "\"This reminds me of that time...\" a voice trailed off.",
    "\"Let's make the most of this moment!\" someone exclaimed cheerfully.",
];

/// Picks a single line of dialogue for a description.
#[derive(Debug, Clone, Default)]
pub struct DialogueGenerator {
    policy: FallbackPolicy,
}

impl DialogueGenerator {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    pub fn generate_dialogue(&self, description: &str) -> &'static str {
        let lowered = description.to_lowercase();

        if lowered.contains("dancing") || lowered.contains("dance") {
            DANCE_LINE
        } else if lowered.contains("fight") {
            CONFRONTATION_LINE
        } else if lowered.contains("love") {
            ROMANCE_LINE
        } else {
            self.policy
                .choose(FallbackSite::Dialogue, description, GENERIC_LINES)
                .copied()
                .unwrap_or(GENERIC_LINES[0])
        }
    }

    /// Every line this generator can return.
    pub fn all_lines() -> impl Iterator<Item = &'static str> {
        [DANCE_LINE, CONFRONTATION_LINE, ROMANCE_LINE]
            .into_iter()
            .chain(GENERIC_LINES.iter().copied())
    }
}
