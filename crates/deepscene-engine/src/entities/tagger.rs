//! Named-entity tagging capability.
//!
//! Setting extraction prefers real named entities over regex heuristics when
//! a tagger is available. Taggers sit behind the `EntityTagger` trait so an
//! external NER model can be plugged in; the built-in `GazetteerTagger`
//! matches a fixed list of known places.

use serde::Deserialize;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use thiserror::Error;

use crate::lexicon::PlaceEntry;

/// Entity categories a tagger can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Person,
    /// Countries, cities, states
    #[serde(rename = "gpe")]
    GeopoliticalPlace,
    /// Non-political locations: mountains, deserts, bodies of water
    #[serde(rename = "loc")]
    Location,
    /// Buildings, bridges, stations
    #[serde(rename = "fac")]
    Facility,
    #[serde(rename = "org")]
    Organization,
    Other,
}

impl EntityCategory {
    /// Whether an entity of this category can serve as a scene setting.
    pub fn is_place_like(&self) -> bool {
        matches!(
            self,
            EntityCategory::GeopoliticalPlace
                | EntityCategory::Location
                | EntityCategory::Facility
                | EntityCategory::Organization
        )
    }
}

/// One entity found by a tagger, as a byte span into the tagged text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntity {
    pub span: Range<usize>,
    pub category: EntityCategory,
}

impl TaggedEntity {
    pub fn new(span: Range<usize>, category: EntityCategory) -> Self {
        Self { span, category }
    }

    /// The entity's text, if the span is valid for `text`.
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.span.clone())
    }
}

/// Errors a tagger may report. Never surfaced from analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggerError {
    #[error("Entity tagger unavailable: {0}")]
    Unavailable(String),

    #[error("Entity tagging failed: {0}")]
    Failed(String),
}

/// A named-entity tagger.
#[cfg_attr(test, mockall::automock)]
pub trait EntityTagger: Send + Sync {
    /// Find entities in `text`, in order of appearance.
    fn find_entities(&self, text: &str) -> Result<Vec<TaggedEntity>, TaggerError>;

    /// Tagger name for logging.
    fn name(&self) -> &'static str;
}

/// Whether an entity tagger is available, selected once at startup.
#[derive(Clone, Default)]
pub enum TaggerCapability {
    #[default]
    Absent,
    Present(Arc<dyn EntityTagger>),
}

impl TaggerCapability {
    pub fn present(tagger: impl EntityTagger + 'static) -> Self {
        Self::Present(Arc::new(tagger))
    }

    pub fn is_present(&self) -> bool {
        matches!(self, TaggerCapability::Present(_))
    }

    pub fn tagger(&self) -> Option<&dyn EntityTagger> {
        match self {
            TaggerCapability::Absent => None,
            TaggerCapability::Present(tagger) => Some(tagger.as_ref()),
        }
    }
}

impl fmt::Debug for TaggerCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaggerCapability::Absent => f.write_str("Absent"),
            TaggerCapability::Present(tagger) => {
                f.debug_tuple("Present").field(&tagger.name()).finish()
            }
        }
    }
}

/// Tagger backed by a fixed list of place names.
///
/// Matching is ASCII case-insensitive and requires word boundaries on both
/// sides, so "Paris" is found in "a cafe in paris" but not in "Parisian".
#[derive(Debug, Clone)]
pub struct GazetteerTagger {
    /// (lowercased name, category), longest names first
    places: Vec<(String, EntityCategory)>,
}

impl GazetteerTagger {
    pub fn new(places: &[PlaceEntry]) -> Self {
        let mut places: Vec<(String, EntityCategory)> = places
            .iter()
            .map(|p| (p.text.trim().to_ascii_lowercase(), p.category))
            .filter(|(text, _)| !text.is_empty())
            .collect();
        places.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl EntityTagger for GazetteerTagger {
    fn find_entities(&self, text: &str) -> Result<Vec<TaggedEntity>, TaggerError> {
        // ASCII lowercasing keeps byte offsets aligned with `text`.
        let haystack = text.to_ascii_lowercase();
        let mut found: Vec<TaggedEntity> = Vec::new();

        for (name, category) in &self.places {
            for (start, _) in haystack.match_indices(name.as_str()) {
                let span = start..start + name.len();
                if !is_word_bounded(&haystack, &span) {
                    continue;
                }
                // Longer names were tried first; skip shorter overlaps.
                let overlaps = found
                    .iter()
                    .any(|e| e.span.start < span.end && span.start < e.span.end);
                if !overlaps {
                    found.push(TaggedEntity::new(span, *category));
                }
            }
        }

        found.sort_by_key(|e| e.span.start);
        Ok(found)
    }

    fn name(&self) -> &'static str {
        "gazetteer"
    }
}

fn is_word_bounded(haystack: &str, span: &Range<usize>) -> bool {
    let before = haystack[..span.start].chars().next_back();
    let after = haystack[span.end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places() -> Vec<PlaceEntry> {
        vec![
            PlaceEntry {
                text: "Paris".into(),
                category: EntityCategory::GeopoliticalPlace,
            },
            PlaceEntry {
                text: "Central Park".into(),
                category: EntityCategory::Facility,
            },
            PlaceEntry {
                text: "Park".into(),
                category: EntityCategory::Other,
            },
        ]
    }

    #[test]
    fn test_finds_places_in_order() {
        let tagger = GazetteerTagger::new(&places());
        let text = "From Central Park to paris";
        let entities = tagger.find_entities(text).unwrap();

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text(text), Some("Central Park"));
        assert_eq!(entities[0].category, EntityCategory::Facility);
        assert_eq!(entities[1].text(text), Some("paris"));
    }

    #[test]
    fn test_requires_word_boundaries() {
        let tagger = GazetteerTagger::new(&places());
        let entities = tagger.find_entities("A Parisian parking lot").unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_spans_survive_non_ascii() {
        let tagger = GazetteerTagger::new(&places());
        let text = "Café scene in Paris";
        let entities = tagger.find_entities(text).unwrap();
        assert_eq!(entities[0].text(text), Some("Paris"));
    }

    #[test]
    fn test_place_like_categories() {
        assert!(EntityCategory::GeopoliticalPlace.is_place_like());
        assert!(EntityCategory::Location.is_place_like());
        assert!(EntityCategory::Facility.is_place_like());
        assert!(EntityCategory::Organization.is_place_like());
        assert!(!EntityCategory::Person.is_place_like());
        assert!(!EntityCategory::Other.is_place_like());
    }

    #[test]
    fn test_category_deserialize() {
        let category: EntityCategory = serde_json::from_str("\"gpe\"").unwrap();
        assert_eq!(category, EntityCategory::GeopoliticalPlace);
        let category: EntityCategory = serde_json::from_str("\"person\"").unwrap();
        assert_eq!(category, EntityCategory::Person);
    }

    #[test]
    fn test_capability_debug() {
        let capability = TaggerCapability::present(GazetteerTagger::new(&places()));
        assert_eq!(format!("{capability:?}"), "Present(\"gazetteer\")");
        assert_eq!(format!("{:?}", TaggerCapability::Absent), "Absent");
    }
}
