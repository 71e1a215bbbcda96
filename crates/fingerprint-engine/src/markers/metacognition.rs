//! Metacognitive awareness: does the text reason about its own reasoning?
//!
//! Counts sentences that explicitly reframe ("put differently"), define
//! recursively ("in terms of itself"), or step up a level ("this argument",
//! "meta-").

use std::collections::BTreeMap;

use crate::lexicon::{self, CueCategory};
use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["level_shifts", "recursive_definitions", "reframing"];

/// Assess metacognitive awareness.
///
/// `reframing`, `recursive_definitions`, and `level_shifts` are sentence
/// fractions; the score is `reframing*40 + recursive_definitions*35 +
/// level_shifts*25`, clamped to `[0, 100]`.
pub fn assess(text: &str) -> MarkerResult {
    let sentences = segment::split_sentences(text);
    if sentences.is_empty() {
        return MarkerResult::zeroed(STAT_KEYS);
    }
    let total = sentences.len() as f32;

    let mut reframing = 0usize;
    let mut recursive = 0usize;
    let mut shifts = 0usize;

    for sentence in &sentences {
        let lower = sentence.to_lowercase();
        if lexicon::contains(&lower, CueCategory::ReframingMarker) {
            reframing += 1;
        }
        if lexicon::contains(&lower, CueCategory::RecursionMarker) {
            recursive += 1;
        }
        if lexicon::contains(&lower, CueCategory::LevelShiftMarker) {
            shifts += 1;
        }
    }

    let reframing_ratio = reframing as f32 / total;
    let recursive_ratio = recursive as f32 / total;
    let shift_ratio = shifts as f32 / total;

    let score = reframing_ratio * 40.0 + recursive_ratio * 35.0 + shift_ratio * 25.0;

    let mut stats = BTreeMap::new();
    stats.insert("reframing".to_string(), reframing_ratio);
    stats.insert("recursive_definitions".to_string(), recursive_ratio);
    stats.insert("level_shifts".to_string(), shift_ratio);
    MarkerResult::new(score, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let result = assess("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.stat("reframing"), Some(0.0));
    }

    #[test]
    fn test_reframing_detected() {
        let result = assess("Put differently, utility is relative.");
        assert_eq!(result.stat("reframing"), Some(1.0));
        assert!(result.score >= 40.0);
    }

    #[test]
    fn test_recursive_definition_detected() {
        let result = assess("The function is specified in terms of itself.");
        assert_eq!(result.stat("recursive_definitions"), Some(1.0));
    }

    #[test]
    fn test_level_shift_detected() {
        let result = assess("This argument assumes its own conclusion.");
        assert_eq!(result.stat("level_shifts"), Some(1.0));
        let result = assess("A meta-level reading changes the stakes.");
        assert_eq!(result.stat("level_shifts"), Some(1.0));
    }

    #[test]
    fn test_plain_text_scores_zero() {
        let result = assess("The cat sat. The dog ran.");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_fractions_of_all_sentences() {
        let result = assess("In other words, value is contextual. The sky is blue.");
        assert_eq!(result.stat("reframing"), Some(0.5));
    }

    #[test]
    fn test_score_in_range() {
        let result = assess(
            "Let us consider the claim itself. \
             In other words, this reasoning describes itself recursively. \
             At a higher level, the meta-question remains open.",
        );
        assert!((0.0..=100.0).contains(&result.score));
        assert!(result.score > 30.0);
    }
}
