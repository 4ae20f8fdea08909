//! Scene analysis orchestration.
//!
//! `SceneAnalyzer` runs the classifiers and extractors over one description
//! and assembles a `SceneResult`. It owns no mutable state: the lexicon and
//! tagger are shared behind `Arc`, so a single analyzer can be cloned or
//! shared across threads freely.
//!
//! # Example
//!
//! ```ignore
//! let analyzer = SceneAnalyzer::builder(default_lexicon())
//!     .fallback_policy(FallbackPolicy::Seeded(7))
//!     .build()?;
//! let scene = analyzer.analyze("A detective in a dark warehouse")?;
//! ```

use std::sync::Arc;
use tracing::{debug, info};

use deepscene_models::{
    AnalysisResult, GenreInfo, SceneError, SceneRequest, SceneResult, TextAnalysis,
};

use crate::config::EngineConfig;
use crate::dialogue::DialogueGenerator;
use crate::entities::{EntityExtractor, TaggerCapability, DEFAULT_SETTING_SENTINEL};
use crate::error::{EngineError, EngineResult};
use crate::fallback::FallbackPolicy;
use crate::genre::GenreClassifier;
use crate::lexicon::Lexicon;
use crate::mood::MoodClassifier;
use crate::prompt::compose_prompt;

/// Builder for `SceneAnalyzer`.
pub struct SceneAnalyzerBuilder {
    lexicon: Arc<Lexicon>,
    fallback_policy: FallbackPolicy,
    tagger: TaggerCapability,
    setting_sentinel: String,
}

impl SceneAnalyzerBuilder {
    pub fn fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.fallback_policy = policy;
        self
    }

    pub fn tagger(mut self, tagger: TaggerCapability) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn setting_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.setting_sentinel = sentinel.into();
        self
    }

    /// Build the analyzer. Fails on a blank setting sentinel.
    pub fn build(self) -> EngineResult<SceneAnalyzer> {
        if self.setting_sentinel.trim().is_empty() {
            return Err(EngineError::invalid_config("setting sentinel must not be blank"));
        }

        info!(
            genres = self.lexicon.genres().len(),
            moods = self.lexicon.moods().len(),
            fallback = %self.fallback_policy,
            tagger = ?self.tagger,
            "Building scene analyzer"
        );

        Ok(SceneAnalyzer {
            genres: GenreClassifier::new(Arc::clone(&self.lexicon), self.fallback_policy),
            moods: MoodClassifier::new(Arc::clone(&self.lexicon), self.fallback_policy),
            entities: EntityExtractor::new(self.tagger, self.setting_sentinel),
            dialogue: DialogueGenerator::new(self.fallback_policy),
            lexicon: self.lexicon,
        })
    }
}

/// Turns free-text scene descriptions into structured scene analyses.
#[derive(Debug, Clone)]
pub struct SceneAnalyzer {
    lexicon: Arc<Lexicon>,
    genres: GenreClassifier,
    moods: MoodClassifier,
    entities: EntityExtractor,
    dialogue: DialogueGenerator,
}

impl SceneAnalyzer {
    /// Start building an analyzer over `lexicon`.
    pub fn builder(lexicon: impl Into<Arc<Lexicon>>) -> SceneAnalyzerBuilder {
        SceneAnalyzerBuilder {
            lexicon: lexicon.into(),
            fallback_policy: FallbackPolicy::default(),
            tagger: TaggerCapability::Absent,
            setting_sentinel: DEFAULT_SETTING_SENTINEL.to_string(),
        }
    }

    /// Build an analyzer from configuration, loading its lexicon.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let lexicon = config.load_lexicon()?;
        let tagger = config.tagger_capability(&lexicon);

        Self::builder(lexicon)
            .fallback_policy(config.fallback_policy)
            .tagger(tagger)
            .setting_sentinel(config.setting_sentinel.clone())
            .build()
    }

    /// Analyze a description.
    ///
    /// Fails only with `SceneError::InvalidInput` for blank input.
    pub fn analyze(&self, description: &str) -> AnalysisResult<SceneResult> {
        self.analyze_with_style(description, None)
    }

    /// Analyze a request, honoring its style override.
    pub fn analyze_request(&self, request: &SceneRequest) -> AnalysisResult<SceneResult> {
        self.analyze_with_style(&request.description, request.style_override())
    }

    /// Genre, characters, setting and suggested style only.
    pub fn analyze_text(&self, text: &str) -> AnalysisResult<TextAnalysis> {
        ensure_not_blank(text)?;

        let genre = self.genres.classify_genre(text);
        Ok(TextAnalysis {
            text: text.to_string(),
            genre: genre.to_string(),
            characters: self.entities.extract_characters(text),
            setting: self.entities.extract_setting(text),
            suggested_style: self.genres.style_for(genre).to_string(),
        })
    }

    /// Genre catalog, in lexicon order.
    pub fn genres(&self) -> Vec<GenreInfo> {
        self.lexicon.genre_catalog()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn analyze_with_style(
        &self,
        description: &str,
        style_override: Option<&str>,
    ) -> AnalysisResult<SceneResult> {
        ensure_not_blank(description)?;

        let genre = self.genres.classify_genre(description);
        let mood = self.moods.classify_mood(description);
        let characters = self.entities.extract_characters(description);
        let setting = self.entities.extract_setting(description);
        let style = style_override.unwrap_or_else(|| self.genres.style_for(genre));
        let image_prompt = compose_prompt(description, style);
        let dialogue = self.dialogue.generate_dialogue(description);

        debug!(
            genre,
            mood = %mood.label,
            confidence = mood.confidence,
            characters = characters.len(),
            setting = %setting,
            style_override = style_override.is_some(),
            "Scene analyzed"
        );

        Ok(SceneResult {
            description: description.to_string(),
            genre: genre.to_string(),
            style: style.to_string(),
            characters,
            setting,
            mood,
            dialogue: dialogue.to_string(),
            image_prompt,
        })
    }
}

fn ensure_not_blank(description: &str) -> AnalysisResult<()> {
    if description.trim().is_empty() {
        return Err(SceneError::invalid_input("scene description is empty"));
    }
    Ok(())
}
