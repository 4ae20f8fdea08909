//! Genre classification and style lookup.

use std::sync::Arc;
use tracing::debug;

use crate::fallback::{FallbackPolicy, FallbackSite};
use crate::lexicon::Lexicon;
use crate::scorer::{self, ScoreTable};
use crate::text::contains_any;

/// Style used for genres the lexicon does not know.
pub const DEFAULT_STYLE: &str = "cinematic, professional photography";

const CELEBRATION_WORDS: &[&str] = &["dancing", "dance", "party", "music", "celebrat"];
const HAPPINESS_WORDS: &[&str] = &["happy", "joy", "smile", "laugh", "fun"];
const SADNESS_WORDS: &[&str] = &["sad", "cry", "tear", "depressed", "lonely"];

/// Genre for upbeat descriptions with no keyword hits.
const LIGHT_GENRE: &str = "comedy";
/// Genre for sad descriptions with no keyword hits.
const SERIOUS_GENRE: &str = "drama";

/// Keyword-weighted genre classifier.
#[derive(Debug, Clone)]
pub struct GenreClassifier {
    lexicon: Arc<Lexicon>,
    policy: FallbackPolicy,
}

impl GenreClassifier {
    pub fn new(lexicon: Arc<Lexicon>, policy: FallbackPolicy) -> Self {
        Self { lexicon, policy }
    }

    /// Raw genre scores for a description.
    pub fn scores(&self, description: &str) -> ScoreTable {
        scorer::score(
            description,
            self.lexicon.genres().iter().map(|g| g.category()),
        )
    }

    /// Classify a description. Always returns a genre in the lexicon.
    pub fn classify_genre(&self, description: &str) -> &str {
        let table = self.scores(description);

        if let Some(best) = table.best().filter(|b| b.score > 0) {
            debug!(genre = %best.name, score = best.score, "Genre from keywords");
            return self.lexicon.genre(&best.name).map_or_else(
                || self.lexicon.first_genre().name(),
                |g| g.name(),
            );
        }

        let lowered = description.to_lowercase();
        if let Some(genre) = self.contextual_genre(&lowered) {
            debug!(genre, "Genre from contextual fallback");
            return genre;
        }

        let names = self.lexicon.genre_names();
        let genre = self
            .policy
            .choose(FallbackSite::Genre, description, &names)
            .copied()
            .unwrap_or_else(|| self.lexicon.first_genre().name());
        debug!(genre, policy = %self.policy, "Genre from fallback policy");
        genre
    }

    /// Style string for a genre, or `DEFAULT_STYLE` when unknown.
    pub fn style_for(&self, genre: &str) -> &str {
        self.lexicon
            .genre(genre)
            .map(|g| g.style())
            .unwrap_or(DEFAULT_STYLE)
    }

    fn contextual_genre(&self, lowered: &str) -> Option<&str> {
        let upbeat = contains_any(lowered, CELEBRATION_WORDS) || contains_any(lowered, HAPPINESS_WORDS);
        let target = if upbeat {
            LIGHT_GENRE
        } else if contains_any(lowered, SADNESS_WORDS) {
            SERIOUS_GENRE
        } else {
            return None;
        };

        self.lexicon.genre(target).map(|g| g.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::default_lexicon;

    fn classifier(policy: FallbackPolicy) -> GenreClassifier {
        GenreClassifier::new(Arc::new(default_lexicon()), policy)
    }

    #[test]
    fn test_keyword_path() {
        let genres = classifier(FallbackPolicy::First);
        assert_eq!(
            genres.classify_genre("A man dancing joyfully at a colorful party with friends"),
            "comedy"
        );
        assert_eq!(
            genres.classify_genre(
                "A detective investigates a mysterious crime in a dark warehouse at night"
            ),
            "thriller"
        );
        assert_eq!(genres.classify_genre("An epic battle and a chase"), "action");
    }

    #[test]
    fn test_contextual_fallback() {
        let genres = classifier(FallbackPolicy::First);
        assert_eq!(genres.classify_genre("Celebrating a birthday"), "comedy");
        assert_eq!(genres.classify_genre("Tears on her face"), "drama");
    }

    #[test]
    fn test_policy_fallback() {
        let genres = classifier(FallbackPolicy::First);
        assert!(genres.scores("Something completely different").is_all_zero());
        assert_eq!(genres.classify_genre("Something completely different"), "comedy");
    }

    #[test]
    fn test_random_fallback_stays_in_lexicon() {
        let genres = classifier(FallbackPolicy::Random);
        let lexicon = default_lexicon();
        for _ in 0..50 {
            let genre = genres.classify_genre("Something completely different");
            assert!(lexicon.has_genre(genre));
        }
    }

    #[test]
    fn test_missing_fallback_target_is_skipped() {
        let lexicon = Lexicon::from_json(
            r#"{
                "genres": [{"name": "western", "style": "dusty", "keywords": ["cowboy"]}],
                "moods": [{"name": "calm"}]
            }"#,
        )
        .unwrap();
        let genres = GenreClassifier::new(Arc::new(lexicon), FallbackPolicy::First);
        assert_eq!(genres.classify_genre("A happy birthday"), "western");
    }

    #[test]
    fn test_style_for() {
        let genres = classifier(FallbackPolicy::First);
        assert!(genres.style_for("horror").starts_with("low-key lighting"));
        assert_eq!(genres.style_for("documentary"), DEFAULT_STYLE);
    }
}
