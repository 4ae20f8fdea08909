//! Genre and mood lexicons.
//!
//! A `Lexicon` maps category names to keyword lists. Genres additionally own
//! a style string used for prompt composition, and the lexicon may carry a
//! list of known places for the gazetteer entity tagger.
//!
//! Lexicons are loaded once at startup, from a JSON file or from the default
//! embedded at compile time, and are never mutated afterwards. Category order
//! is preserved from the source file and is the tie-break order for scoring.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use deepscene_models::GenreInfo;

use crate::entities::EntityCategory;
use crate::error::{EngineError, EngineResult};

/// A named category with its scoring keywords.
///
/// Keywords are stored lowercased, trimmed and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
}

impl Category {
    /// Create a category, normalizing its keywords.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .filter(|k| seen.insert(k.clone()))
            .collect();

        Self {
            name: name.into().trim().to_string(),
            keywords,
        }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized keywords, in source order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// A genre category and the visual style it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    category: Category,
    style: String,
}

impl GenreEntry {
    pub fn new(category: Category, style: impl Into<String>) -> Self {
        Self {
            category,
            style: style.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.category.name()
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// A place name known to the gazetteer tagger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceEntry {
    /// Place name as it should be reported
    pub text: String,
    /// Entity category the place belongs to
    pub category: EntityCategory,
}

#[derive(Debug, Deserialize)]
struct GenreDef {
    name: String,
    style: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryDef {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// The top-level JSON structure for a lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    genres: Vec<GenreDef>,
    moods: Vec<CategoryDef>,
    #[serde(default)]
    places: Vec<PlaceEntry>,
}

/// Immutable genre and mood lexicons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    genres: Vec<GenreEntry>,
    moods: Vec<Category>,
    places: Vec<PlaceEntry>,
}

impl Lexicon {
    /// Build a lexicon from already-constructed entries.
    ///
    /// Fails when either lexicon is empty or a category name is blank or
    /// repeated. Genre lookups and the classifiers rely on both lexicons
    /// being non-empty.
    pub fn new(
        genres: Vec<GenreEntry>,
        moods: Vec<Category>,
        places: Vec<PlaceEntry>,
    ) -> EngineResult<Self> {
        if genres.is_empty() {
            return Err(EngineError::invalid_lexicon("at least one genre is required"));
        }
        if moods.is_empty() {
            return Err(EngineError::invalid_lexicon("at least one mood is required"));
        }
        check_names("genre", genres.iter().map(GenreEntry::name))?;
        check_names("mood", moods.iter().map(Category::name))?;

        if let Some(place) = places.iter().find(|p| p.text.trim().is_empty()) {
            return Err(EngineError::invalid_lexicon(format!(
                "place with category {:?} has an empty name",
                place.category
            )));
        }

        Ok(Self {
            genres,
            moods,
            places,
        })
    }

    /// Parse a lexicon from a JSON string.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;

        let genres = file
            .genres
            .into_iter()
            .map(|g| GenreEntry::new(Category::new(g.name, g.keywords), g.style))
            .collect();
        let moods = file
            .moods
            .into_iter()
            .map(|m| Category::new(m.name, m.keywords))
            .collect();

        Self::new(genres, moods, file.places)
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| EngineError::lexicon_read(path, e))?;
        let lexicon = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            genres = lexicon.genres.len(),
            moods = lexicon.moods.len(),
            places = lexicon.places.len(),
            "Loaded lexicon"
        );

        Ok(lexicon)
    }

    /// All genres, in lexicon order.
    pub fn genres(&self) -> &[GenreEntry] {
        &self.genres
    }

    /// All moods, in lexicon order.
    pub fn moods(&self) -> &[Category] {
        &self.moods
    }

    /// Known places for the gazetteer tagger.
    pub fn places(&self) -> &[PlaceEntry] {
        &self.places
    }

    /// Genre names, in lexicon order.
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(GenreEntry::name).collect()
    }

    /// Look up a genre by name.
    pub fn genre(&self, name: &str) -> Option<&GenreEntry> {
        self.genres.iter().find(|g| g.name() == name)
    }

    /// Whether `name` is a genre in this lexicon.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre(name).is_some()
    }

    /// The first genre in lexicon order.
    pub fn first_genre(&self) -> &GenreEntry {
        // Non-empty by construction.
        &self.genres[0]
    }

    /// Genre catalog entries, in lexicon order.
    pub fn genre_catalog(&self) -> Vec<GenreInfo> {
        self.genres
            .iter()
            .map(|g| GenreInfo {
                name: g.name().to_string(),
                style: g.style().to_string(),
                keywords: g.category().keywords().to_vec(),
            })
            .collect()
    }
}

fn check_names<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(EngineError::invalid_lexicon(format!("{kind} name is empty")));
        }
        if !seen.insert(name) {
            return Err(EngineError::invalid_lexicon(format!(
                "duplicate {kind} name: {name}"
            )));
        }
    }
    Ok(())
}

/// Load the default lexicon embedded at compile time.
///
/// Panics if the embedded JSON is malformed, which the tests rule out.
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../data/lexicon.json");
    Lexicon::from_json(json).expect("embedded lexicon.json is malformed")
}
