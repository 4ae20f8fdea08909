//! Keyword scoring shared by the genre and mood classifiers.
//!
//! Every keyword found anywhere in the lowercased text earns one point.
//! A keyword that also appears as a whole whitespace-delimited token earns
//! two more, so "cat" inside "category" scores 1 while a standalone "cat"
//! scores 3.

use crate::lexicon::Category;

/// Points for a keyword found as a substring.
pub const SUBSTRING_POINTS: u32 = 1;

/// Extra points when the keyword is also a whole token.
pub const TOKEN_BONUS: u32 = 2;

/// Score of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    pub name: String,
    pub score: u32,
}

/// Per-category scores from one scoring pass, in lexicon order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreTable {
    entries: Vec<CategoryScore>,
}

impl ScoreTable {
    /// All scores, in lexicon order.
    pub fn entries(&self) -> &[CategoryScore] {
        &self.entries
    }

    /// Score of the named category, if it was scored.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.score)
    }

    /// Highest-scoring category.
    ///
    /// Ties go to the category that comes first in lexicon order, which
    /// also covers the common case of every category scoring zero.
    pub fn best(&self) -> Option<&CategoryScore> {
        let mut best: Option<&CategoryScore> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.score <= current.score => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Whether no keyword matched at all.
    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|e| e.score == 0)
    }
}

/// Score `text` against each category.
pub fn score<'a, I>(text: &str, categories: I) -> ScoreTable
where
    I: IntoIterator<Item = &'a Category>,
{
    let lowered = text.to_lowercase();
    let padded = format!(" {lowered} ");

    let entries = categories
        .into_iter()
        .map(|category| CategoryScore {
            name: category.name().to_string(),
            score: category
                .keywords()
                .iter()
                .map(|keyword| keyword_points(&lowered, &padded, keyword))
                .sum(),
        })
        .collect();

    ScoreTable { entries }
}

fn keyword_points(lowered: &str, padded: &str, keyword: &str) -> u32 {
    if !lowered.contains(keyword) {
        return 0;
    }
    if padded.contains(&format!(" {keyword} ")) {
        SUBSTRING_POINTS + TOKEN_BONUS
    } else {
        SUBSTRING_POINTS
    }
}
