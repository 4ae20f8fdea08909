//! Engine configuration.

use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::entities::{GazetteerTagger, TaggerCapability, DEFAULT_SETTING_SENTINEL};
use crate::error::{EngineError, EngineResult};
use crate::fallback::FallbackPolicy;
use crate::lexicon::{default_lexicon, Lexicon};

/// Which entity tagger to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaggerMode {
    /// Gazetteer when the lexicon lists places, otherwise none
    #[default]
    Auto,
    None,
    Gazetteer,
}

impl FromStr for TaggerMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(TaggerMode::Auto),
            "none" | "off" => Ok(TaggerMode::None),
            "gazetteer" => Ok(TaggerMode::Gazetteer),
            other => Err(EngineError::invalid_config(format!(
                "unknown tagger mode: {other}"
            ))),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Lexicon JSON file; the embedded default when unset
    pub lexicon_path: Option<PathBuf>,
    /// Setting reported when none is detected
    pub setting_sentinel: String,
    /// How "no signal" fallbacks pick a candidate
    pub fallback_policy: FallbackPolicy,
    /// Entity tagger selection
    pub tagger: TaggerMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            setting_sentinel: DEFAULT_SETTING_SENTINEL.to_string(),
            fallback_policy: FallbackPolicy::Random,
            tagger: TaggerMode::Auto,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = var("DEEPSCENE_SEED")
            .map(|s| {
                s.trim().parse::<u64>().map_err(|_| {
                    EngineError::invalid_config(format!("DEEPSCENE_SEED is not a u64: {s}"))
                })
            })
            .transpose()?;

        let fallback_policy = match var("DEEPSCENE_FALLBACK") {
            Some(raw) => {
                let policy = FallbackPolicy::from_str(&raw)
                    .map_err(|e| EngineError::invalid_config(e.to_string()))?;
                match (policy, seed) {
                    (FallbackPolicy::Seeded(_), Some(seed)) if !raw.contains(':') => {
                        FallbackPolicy::Seeded(seed)
                    }
                    _ => policy,
                }
            }
            None => seed.map_or(FallbackPolicy::Random, FallbackPolicy::Seeded),
        };

        let tagger = var("DEEPSCENE_TAGGER")
            .map(|s| s.parse::<TaggerMode>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            lexicon_path: var("DEEPSCENE_LEXICON_PATH").map(PathBuf::from),
            setting_sentinel: var("DEEPSCENE_SETTING_SENTINEL")
                .unwrap_or_else(|| DEFAULT_SETTING_SENTINEL.to_string()),
            fallback_policy,
            tagger,
        })
    }

    /// Load the configured lexicon, or the embedded default.
    pub fn load_lexicon(&self) -> EngineResult<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_path(path),
            None => Ok(default_lexicon()),
        }
    }

    /// Resolve the tagger capability for a loaded lexicon.
    pub fn tagger_capability(&self, lexicon: &Lexicon) -> TaggerCapability {
        match self.tagger {
            TaggerMode::None => TaggerCapability::Absent,
            TaggerMode::Auto if lexicon.places().is_empty() => TaggerCapability::Absent,
            TaggerMode::Auto => TaggerCapability::present(GazetteerTagger::new(lexicon.places())),
            TaggerMode::Gazetteer => {
                if lexicon.places().is_empty() {
                    warn!("Gazetteer tagger requested but the lexicon lists no places");
                }
                TaggerCapability::present(GazetteerTagger::new(lexicon.places()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.lexicon_path.is_none());
        assert_eq!(config.setting_sentinel, "general location");
        assert_eq!(config.fallback_policy, FallbackPolicy::Random);
        assert_eq!(config.tagger, TaggerMode::Auto);
    }

    #[test]
    fn test_seed_alone_implies_seeded() {
        let config = EngineConfig::from_lookup(lookup(&[("DEEPSCENE_SEED", "99")])).unwrap();
        assert_eq!(config.fallback_policy, FallbackPolicy::Seeded(99));
    }

    #[test]
    fn test_seeded_with_seed() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("DEEPSCENE_FALLBACK", "seeded"),
            ("DEEPSCENE_SEED", "5"),
        ]))
        .unwrap();
        assert_eq!(config.fallback_policy, FallbackPolicy::Seeded(5));
    }

    #[test]
    fn test_explicit_policy_wins_over_seed() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("DEEPSCENE_FALLBACK", "first"),
            ("DEEPSCENE_SEED", "5"),
        ]))
        .unwrap();
        assert_eq!(config.fallback_policy, FallbackPolicy::First);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            EngineConfig::from_lookup(lookup(&[("DEEPSCENE_SEED", "abc")])),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_lookup(lookup(&[("DEEPSCENE_FALLBACK", "sometimes")])),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_lookup(lookup(&[("DEEPSCENE_TAGGER", "spacy")])),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_sentinel_and_path() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("DEEPSCENE_SETTING_SENTINEL", "Various Locations"),
            ("DEEPSCENE_LEXICON_PATH", "/etc/deepscene/lexicon.json"),
        ]))
        .unwrap();
        assert_eq!(config.setting_sentinel, "Various Locations");
        assert_eq!(
            config.lexicon_path,
            Some(PathBuf::from("/etc/deepscene/lexicon.json"))
        );
    }

    #[test]
    fn test_tagger_capability() {
        let lexicon = default_lexicon();

        let config = EngineConfig::default();
        assert!(config.tagger_capability(&lexicon).is_present());

        let config = EngineConfig {
            tagger: TaggerMode::None,
            ..Default::default()
        };
        assert!(!config.tagger_capability(&lexicon).is_present());
    }

    #[test]
    fn test_auto_tagger_without_places() {
        let lexicon = Lexicon::from_json(
            r#"{"genres": [{"name": "drama", "style": "x"}], "moods": [{"name": "sad"}]}"#,
        )
        .unwrap();
        let config = EngineConfig::default();
        assert!(!config.tagger_capability(&lexicon).is_present());
    }
}
