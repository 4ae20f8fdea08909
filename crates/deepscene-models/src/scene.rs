//! Scene analysis request and result models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detected mood with its classification confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoodReading {
    /// Mood category name (e.g. "happy", "tense")
    pub label: String,

    /// Confidence in [0, 0.95], rounded to two decimals
    pub confidence: f64,
}

impl MoodReading {
    /// Create a mood reading.
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Structured annotation of a single scene description.
///
/// Every field is populated; analysis either returns a complete result or
/// rejects the description up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneResult {
    /// The input description, verbatim
    pub description: String,

    /// Genre label, always a key of the configured genre lexicon
    pub genre: String,

    /// Visual style used for the image prompt
    pub style: String,

    /// Detected characters, in rule order (never empty)
    pub characters: Vec<String>,

    /// Detected setting, or the configured sentinel
    pub setting: String,

    /// Detected mood
    pub mood: MoodReading,

    /// A line of dialogue for the scene
    pub dialogue: String,

    /// Prompt for the image-generation collaborator
    pub image_prompt: String,
}

impl SceneResult {
    /// Whether the given character label was detected.
    pub fn has_character(&self, label: &str) -> bool {
        self.characters.iter().any(|c| c == label)
    }
}

/// Request to analyze a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SceneRequest {
    /// Free-text scene description
    pub description: String,

    /// Visual style to use instead of the genre's default style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl SceneRequest {
    /// Create a request without a style override.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            style: None,
        }
    }

    /// Set a style override.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// The style override, if one was given and is not blank.
    pub fn style_override(&self) -> Option<&str> {
        self.style
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Genre, character and setting analysis without mood, dialogue or prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextAnalysis {
    /// The analyzed text, verbatim
    pub text: String,

    /// Genre label
    pub genre: String,

    /// Detected characters (never empty)
    pub characters: Vec<String>,

    /// Detected setting, or the configured sentinel
    pub setting: String,

    /// Style associated with the detected genre
    pub suggested_style: String,
}
