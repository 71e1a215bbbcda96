//! Semantic compression: how much inferential work each sentence performs.
//!
//! A sentence is "high-impact" when it carries inferential connectives,
//! synthesis connectives, or definitional phrasing. Dense texts pack
//! implication chains (if...then, since...therefore) into few sentences;
//! diffuse texts spread little meaning over many.

use std::collections::BTreeMap;

use crate::lexicon::{self, CueCategory};
use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["avg_impact", "compression_ratio", "density"];

/// Per-cue impact weights. A sentence's impact is clamped to 1.0.
const CONNECTIVE_WEIGHT: f32 = 0.3;
const SYNTHESIS_WEIGHT: f32 = 0.25;
const DEFINITION_WEIGHT: f32 = 0.2;
const CLAUSE_BONUS: f32 = 0.1;

/// Impact level above which a sentence counts toward density.
const HIGH_IMPACT: f32 = 0.6;

/// Assess semantic compression.
///
/// `density` is the fraction of sentences with impact above 0.6,
/// `avg_impact` the mean per-sentence impact, and `compression_ratio` the
/// implication-chain count per sentence plus a definitional bonus. The
/// score is `density*60 + avg_impact*40 + compression_ratio*30`, clamped
/// to `[0, 100]`.
pub fn assess(text: &str) -> MarkerResult {
    let sentences = segment::split_sentences(text);
    if sentences.is_empty() {
        return MarkerResult::zeroed(STAT_KEYS);
    }
    let total = sentences.len() as f32;

    let mut impact_sum = 0.0;
    let mut high_impact = 0usize;
    let mut chains = 0usize;
    let mut definitional = 0usize;

    for sentence in &sentences {
        let lower = sentence.to_lowercase();

        let mut impact = lexicon::count(&lower, CueCategory::InferentialConnective) as f32
            * CONNECTIVE_WEIGHT;
        let mut synthesis = lexicon::count(&lower, CueCategory::SynthesisConnective);
        if lexicon::both_and(&lower) {
            synthesis += 1;
        }
        impact += synthesis as f32 * SYNTHESIS_WEIGHT;
        impact +=
            lexicon::count(&lower, CueCategory::DefinitionalPhrase) as f32 * DEFINITION_WEIGHT;
        if segment::clause_separators(sentence) >= 2 {
            impact += CLAUSE_BONUS;
        }
        let impact = impact.min(1.0);

        impact_sum += impact;
        if impact > HIGH_IMPACT {
            high_impact += 1;
        }
        if implication_chain(&lower) {
            chains += 1;
        }
        if lexicon::contains(&lower, CueCategory::DefinitionalPhrase) {
            definitional += 1;
        }
    }

    let density = high_impact as f32 / total;
    let avg_impact = impact_sum / total;
    let compression_ratio = chains as f32 / total + 0.1 * (definitional as f32 / total);

    let score = density * 60.0 + avg_impact * 40.0 + compression_ratio * 30.0;

    let mut stats = BTreeMap::new();
    stats.insert("density".to_string(), density);
    stats.insert("avg_impact".to_string(), avg_impact);
    stats.insert("compression_ratio".to_string(), compression_ratio);
    MarkerResult::new(score, stats)
}

/// Does a sentence carry an implication-chain pattern?
///
/// Recognized chains: if...then, since...therefore/thus,
/// because...thus/therefore.
fn implication_chain(lower: &str) -> bool {
    let has = |p| lexicon::contains_phrase(lower, p);
    (has("if") && has("then"))
        || (has("since") && (has("therefore") || has("thus")))
        || (has("because") && (has("thus") || has("therefore")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let result = assess("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.stat("density"), Some(0.0));
    }

    #[test]
    fn test_plain_text_scores_low() {
        let result = assess("The cat sat. The dog ran. Birds flew away.");
        assert!(result.score < 15.0, "plain text scored {}", result.score);
    }

    #[test]
    fn test_inferential_text_scores_higher() {
        let dense = assess(
            "Entropy is defined as disorder; thus, structure decays. \
             If energy disperses, then order cannot persist. \
             This combines thermodynamics and information theory.",
        );
        let plain = assess("The cat sat. The dog ran. Birds flew away.");
        assert!(
            dense.score > plain.score + 20.0,
            "dense {} vs plain {}",
            dense.score,
            plain.score
        );
    }

    #[test]
    fn test_definitional_inferential_pair() {
        // Reference behavior: definitional setup plus inferential follow-up
        // must clear 60.
        let result =
            assess("X is defined as Y. Therefore, Z follows necessarily from Y, since Y entails Z.");
        assert!(result.score > 60.0, "scored {}", result.score);
    }

    #[test]
    fn test_impact_clamped_per_sentence() {
        // A single sentence stuffed with every cue class still has impact <= 1.0
        // so avg_impact stays bounded.
        let result = assess(
            "Therefore, thus, consequently, this implies and entails that X is defined as Y, \
             refers to Z, combines A, integrates B.",
        );
        assert!(result.stat("avg_impact").unwrap() <= 1.0);
    }

    #[test]
    fn test_implication_chain_detection() {
        assert!(implication_chain("if a holds, then b follows"));
        assert!(implication_chain("since a holds, therefore b"));
        assert!(implication_chain("because a, thus b"));
        assert!(!implication_chain("a and b are unrelated"));
        assert!(!implication_chain("if only it were so"));
    }

    #[test]
    fn test_density_counts_high_impact_fraction() {
        // One high-impact sentence out of two.
        let result = assess("Thus it follows, consequently, that A implies B. The sky is blue.");
        assert!((result.stat("density").unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_score_in_range() {
        let result = assess(
            "Since A, therefore B. Since B, therefore C. Since C, therefore D. \
             If D, then E. Because E, thus F. Each step is defined as a relation.",
        );
        assert!((0.0..=100.0).contains(&result.score));
    }
}
