//! Small text helpers shared by the classifiers and extractors.

/// Whether any of `words` occurs as a substring of `haystack`.
///
/// `haystack` is expected to already be lowercased.
pub(crate) fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|word| haystack.contains(word))
}

/// Normalize a raw description before analysis.
///
/// Trims surrounding whitespace and replaces line breaks with spaces so
/// multi-line input reads as one description.
pub fn clean_description(text: &str) -> String {
    text.trim().replace("\r\n", " ").replace(['\n', '\r'], " ")
}
