//! Epistemic resistance: how much a text resists effortless agreement.
//!
//! Tautological sentences ("obviously", "is important") are disqualified
//! up front. The remaining sentences earn credit for forcing
//! reinterpretation, demanding cognitive effort (nested logic,
//! self-reference, paradox, heavy subordination), or being non-obvious
//! (surprise vocabulary, precision qualifiers, explicit distinctions).

use std::collections::BTreeMap;

use crate::lexicon::{self, CueCategory};
use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["cognitive_effort", "non_obviousness", "novelty_index"];

/// Distinct logical operators needed to count as nested logic.
const NESTED_LOGIC_MIN: usize = 2;
/// Clause separators marking heavy subordination.
const HEAVY_CLAUSES: usize = 3;

/// Assess epistemic resistance.
///
/// `non_obviousness`, `cognitive_effort`, and `novelty_index` are the
/// fractions of all sentences that force reinterpretation, carry high
/// cognitive load, and are non-obvious respectively. The score is
/// `non_obviousness*50 + cognitive_effort*30 + novelty_index*20`.
pub fn assess(text: &str) -> MarkerResult {
    let sentences = segment::split_sentences(text);
    if sentences.is_empty() {
        return MarkerResult::zeroed(STAT_KEYS);
    }
    let total = sentences.len() as f32;

    let mut reinterpreting = 0usize;
    let mut effortful = 0usize;
    let mut non_obvious = 0usize;

    for sentence in &sentences {
        let lower = sentence.to_lowercase();
        if lexicon::contains(&lower, CueCategory::TautologyMarker) {
            continue;
        }

        if lexicon::contains(&lower, CueCategory::ReinterpretationMarker) {
            reinterpreting += 1;
        }
        if high_cognitive_load(&lower, sentence) {
            effortful += 1;
        }
        if lexicon::contains(&lower, CueCategory::NoveltyMarker)
            || lexicon::contains(&lower, CueCategory::PrecisionQualifier)
            || lexicon::contains(&lower, CueCategory::DistinctionMarker)
        {
            non_obvious += 1;
        }
    }

    let non_obviousness = reinterpreting as f32 / total;
    let cognitive_effort = effortful as f32 / total;
    let novelty_index = non_obvious as f32 / total;

    let score = non_obviousness * 50.0 + cognitive_effort * 30.0 + novelty_index * 20.0;

    let mut stats = BTreeMap::new();
    stats.insert("non_obviousness".to_string(), non_obviousness);
    stats.insert("cognitive_effort".to_string(), cognitive_effort);
    stats.insert("novelty_index".to_string(), novelty_index);
    MarkerResult::new(score, stats)
}

/// Nested logical connectives, self-reference, paradox vocabulary, or
/// heavy subordination.
fn high_cognitive_load(lower: &str, sentence: &str) -> bool {
    lexicon::count(lower, CueCategory::LoadMarker) >= NESTED_LOGIC_MIN
        || lexicon::contains(lower, CueCategory::SelfReferenceMarker)
        || lexicon::contains(lower, CueCategory::ParadoxMarker)
        || segment::clause_separators(sentence) >= HEAVY_CLAUSES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let result = assess("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.stat("novelty_index"), Some(0.0));
    }

    #[test]
    fn test_tautological_sentences_disqualified() {
        let result = assess(
            "Obviously, precision matters, strictly speaking, if and only then. \
             Of course this paradox resolves itself.",
        );
        // Both sentences are tautological, so nothing counts.
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_reinterpretation_counts() {
        let result = assess("Contrary to intuition, losses loom larger than gains.");
        assert_eq!(result.stat("non_obviousness"), Some(1.0));
        assert!(result.score >= 50.0);
    }

    #[test]
    fn test_nested_logic_is_effortful() {
        let result = assess("If the premise holds, then the conclusion binds.");
        assert_eq!(result.stat("cognitive_effort"), Some(1.0));
    }

    #[test]
    fn test_single_logic_word_is_not_nested() {
        let result = assess("If it rains we stay home.");
        assert_eq!(result.stat("cognitive_effort"), Some(0.0));
    }

    #[test]
    fn test_precision_qualifiers_are_non_obvious() {
        let result = assess("The effect holds precisely when feedback is absent.");
        assert_eq!(result.stat("novelty_index"), Some(1.0));
    }

    #[test]
    fn test_distinctions_are_non_obvious() {
        let result = assess("Correlation, as opposed to causation, carries no direction.");
        assert_eq!(result.stat("novelty_index"), Some(1.0));
    }

    #[test]
    fn test_plain_text_scores_zero() {
        let result = assess("The cat sat. The dog ran. Birds flew south.");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_in_range() {
        let result = assess(
            "Paradoxically, the proof refers to itself. \
             If consistency holds, then completeness fails, unless the system is trivial. \
             This is distinct from mere circularity.",
        );
        assert!((0.0..=100.0).contains(&result.score));
        assert!(result.score > 0.0);
    }
}
