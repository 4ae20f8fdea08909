//! Mood classification with a confidence score.

use std::sync::Arc;
use tracing::debug;

use deepscene_models::MoodReading;

use crate::fallback::{FallbackPolicy, FallbackSite};
use crate::lexicon::Lexicon;
use crate::scorer::{self, ScoreTable};
use crate::text::contains_any;

pub const BASE_CONFIDENCE: f64 = 0.7;
pub const CONFIDENCE_STEP: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;
/// Confidence of any mood chosen without a keyword hit.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;

/// Zero-score overrides, checked in order.
const MOOD_OVERRIDES: &[(&[&str], &str)] = &[
    (&["dancing", "dance", "party", "celebrat"], "happy"),
    (&["fight", "battle", "chase"], "tense"),
    (&["love", "romantic", "kiss"], "romantic"),
];

/// Moods the policy picks from when nothing else applies.
const SAFE_MOODS: &[&str] = &["happy", "energetic", "peaceful"];

/// Confidence for a winning keyword score, rounded to two decimals.
pub fn confidence_for_score(score: u32) -> f64 {
    let raw = (BASE_CONFIDENCE + CONFIDENCE_STEP * f64::from(score)).min(MAX_CONFIDENCE);
    round2(raw)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keyword-weighted mood classifier.
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    lexicon: Arc<Lexicon>,
    policy: FallbackPolicy,
}

impl MoodClassifier {
    pub fn new(lexicon: Arc<Lexicon>, policy: FallbackPolicy) -> Self {
        Self { lexicon, policy }
    }

    /// Raw mood scores for a description.
    pub fn scores(&self, description: &str) -> ScoreTable {
        scorer::score(description, self.lexicon.moods())
    }

    pub fn classify_mood(&self, description: &str) -> MoodReading {
        let table = self.scores(description);

        if let Some(best) = table.best().filter(|b| b.score > 0) {
            let confidence = confidence_for_score(best.score);
            debug!(mood = %best.name, score = best.score, confidence, "Mood from keywords");
            return MoodReading::new(best.name.clone(), confidence);
        }

        let lowered = description.to_lowercase();
        let label = MOOD_OVERRIDES
            .iter()
            .find(|(words, _)| contains_any(&lowered, words))
            .map(|(_, mood)| *mood)
            .unwrap_or_else(|| {
                self.policy
                    .choose(FallbackSite::Mood, description, SAFE_MOODS)
                    .copied()
                    .unwrap_or(SAFE_MOODS[0])
            });

        debug!(mood = label, policy = %self.policy, "Mood from fallback");
        MoodReading::new(label, FALLBACK_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_lexicon;

    fn classifier(policy: FallbackPolicy) -> MoodClassifier {
        MoodClassifier::new(Arc::new(default_lexicon()), policy)
    }

    #[test]
    fn test_confidence_curve() {
        assert_eq!(confidence_for_score(1), 0.8);
        assert_eq!(confidence_for_score(2), 0.9);
        assert_eq!(confidence_for_score(3), 0.95);
        assert_eq!(confidence_for_score(40), 0.95);
    }

    #[test]
    fn test_confidence_monotonic() {
        let mut previous = 0.0;
        for score in 1..20 {
            let confidence = confidence_for_score(score);
            assert!(confidence >= previous);
            assert!(confidence <= MAX_CONFIDENCE);
            previous = confidence;
        }
    }

    #[test]
    fn test_keyword_path() {
        let moods = classifier(FallbackPolicy::First);
        let reading =
            moods.classify_mood("A man dancing joyfully at a colorful party with friends");
        assert_eq!(reading.label, "happy");
        assert_eq!(reading.confidence, 0.95);

        let reading = moods.classify_mood("tears on her face");
        assert_eq!(reading.label, "sad");
        assert_eq!(reading.confidence, 0.8);
    }

    #[test]
    fn test_overrides() {
        let moods = classifier(FallbackPolicy::First);

        let reading = moods.classify_mood("A fight breaks out");
        assert_eq!(reading.label, "tense");
        assert_eq!(reading.confidence, FALLBACK_CONFIDENCE);

        assert_eq!(moods.classify_mood("They dance").label, "happy");
    }

    #[test]
    fn test_romantic_override_with_custom_lexicon() {
        let lexicon = Lexicon::from_json(
            r#"{
                "genres": [{"name": "drama", "style": "x"}],
                "moods": [{"name": "calm", "keywords": ["still"]}]
            }"#,
        )
        .unwrap();
        let moods = MoodClassifier::new(Arc::new(lexicon), FallbackPolicy::First);
        assert_eq!(moods.classify_mood("They kiss goodbye").label, "romantic");
    }

    #[test]
    fn test_safe_mood_fallback() {
        let moods = classifier(FallbackPolicy::First);
        let reading = moods.classify_mood("Something completely different");
        assert_eq!(reading.label, "happy");
        assert_eq!(reading.confidence, FALLBACK_CONFIDENCE);

        let moods = classifier(FallbackPolicy::Random);
        for _ in 0..30 {
            let reading = moods.classify_mood("Something completely different");
            assert!(SAFE_MOODS.contains(&reading.label.as_str()));
        }
    }
}
