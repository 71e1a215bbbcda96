//! Concept extraction from raw text.
//!
//! A "concept" is a normalized (lower-cased) string standing in for a
//! distinct idea. Three independent pattern families contribute candidates:
//! capitalized multi-word spans, "concept/theory/... of X" phrases, and
//! abstract-noun suffixes. Matches collapse into a set, so repeated
//! mentions count once; set cardinality is the only signal the topology
//! marker consumes directly.

use std::collections::BTreeSet;

use regex::Regex;

/// Extracts normalized concept sets from text.
///
/// The three patterns are compiled once at construction; `extract` performs
/// no allocation beyond the result set.
///
/// # Example
///
/// ```
/// use fingerprint_engine::concept::ConceptExtractor;
///
/// let extractor = ConceptExtractor::new();
/// let concepts = extractor.extract("The theory of evolution reshaped General Biology.");
/// assert!(concepts.contains("evolution"));
/// assert!(concepts.contains("general biology"));
/// ```
#[derive(Debug, Clone)]
pub struct ConceptExtractor {
    /// Capitalized multi-word spans ("General Systems Theory").
    proper_span: Regex,
    /// "concept/theory/principle/framework/model/system of X" phrases.
    of_phrase: Regex,
    /// Abstract-noun suffixes (-ism, -ity, -tion, -ness, -ence, -ance).
    abstract_noun: Regex,
}

impl ConceptExtractor {
    /// Create an extractor with the three compiled concept patterns.
    pub fn new() -> Self {
        Self {
            proper_span: Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b")
                .expect("proper-span pattern is valid"),
            of_phrase: Regex::new(
                r"(?i)\b(?:concept|theory|principle|framework|model|system)\s+of\s+([A-Za-z]+)",
            )
            .expect("of-phrase pattern is valid"),
            abstract_noun: Regex::new(r"\b[A-Za-z]{3,}(?:ism|ity|tion|ness|ence|ance)\b")
                .expect("abstract-noun pattern is valid"),
        }
    }

    /// Extract the normalized concept set from `text`.
    ///
    /// Results are lower-cased with internal whitespace collapsed, and
    /// deduplicated by string equality. Empty input yields an empty set.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut concepts = BTreeSet::new();

        for m in self.proper_span.find_iter(text) {
            concepts.insert(normalize(m.as_str()));
        }
        for caps in self.of_phrase.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                concepts.insert(normalize(m.as_str()));
            }
        }
        for m in self.abstract_noun.find_iter(text) {
            concepts.insert(normalize(m.as_str()));
        }

        concepts
    }
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case and collapse internal whitespace runs to single spaces.
fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
