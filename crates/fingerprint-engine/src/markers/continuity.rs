//! Inferential continuity: how tightly each sentence depends on the ones
//! before it.
//!
//! For every adjacent sentence pair this assessor computes a `dependency`
//! score (explicit linking connectives plus term overlap) and a `necessity`
//! score (reuse of previously defined terms plus explicit causal markers).
//! Texts that build an argument chain score high; disconnected sentence
//! sequences score near zero.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::lexicon::{self, CueCategory};
use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["building", "coherence_index", "gap_frequency"];

const STRONG_LINK: f32 = 0.8;
const MODERATE_LINK: f32 = 0.4;
const CONTRAST_LINK: f32 = 0.3;
const OVERLAP_BONUS: f32 = 0.2;

const DEFINED_TERM_REUSE: f32 = 0.5;
const CAUSAL_MARKER: f32 = 0.4;

/// Necessity above this counts toward the coherence index.
const NECESSARY: f32 = 0.7;
/// Dependency above this counts as a "building" pair.
const BUILDING: f32 = 0.5;
/// Below this on both axes, a pair is a continuity gap.
const GAP: f32 = 0.2;

struct SentenceView {
    lower: String,
    terms: BTreeSet<String>,
    definitional: bool,
}

/// Assess inferential continuity.
///
/// `coherence_index` is the fraction of adjacent pairs whose necessity
/// exceeds 0.7, `building` the fraction whose dependency exceeds 0.5, and
/// `gap_frequency` the fraction with both below 0.2. The score is
/// `coherence_index*70 + building*30 - gap_frequency*40`, floored at 0.
pub fn assess(text: &str) -> MarkerResult {
    let sentences = segment::split_sentences(text);
    if sentences.len() < 2 {
        return MarkerResult::zeroed(STAT_KEYS);
    }

    let views: Vec<SentenceView> = sentences
        .iter()
        .map(|s| {
            let lower = s.to_lowercase();
            let terms: BTreeSet<String> = segment::content_words(&lower).into_iter().collect();
            let definitional = lexicon::contains(&lower, CueCategory::DefinitionalPhrase);
            SentenceView {
                lower,
                terms,
                definitional,
            }
        })
        .collect();

    let pairs = (views.len() - 1) as f32;
    let mut necessary = 0usize;
    let mut building = 0usize;
    let mut gaps = 0usize;

    for i in 1..views.len() {
        let current = &views[i];
        let previous = &views[i - 1];

        let dependency = dependency_score(current, previous);
        let necessity = necessity_score(current, &views[..i]);

        if necessity > NECESSARY {
            necessary += 1;
        }
        if dependency > BUILDING {
            building += 1;
        }
        if dependency < GAP && necessity < GAP {
            gaps += 1;
        }
    }

    let coherence_index = necessary as f32 / pairs;
    let building_ratio = building as f32 / pairs;
    let gap_frequency = gaps as f32 / pairs;

    let score = coherence_index * 70.0 + building_ratio * 30.0 - gap_frequency * 40.0;

    let mut stats = BTreeMap::new();
    stats.insert("coherence_index".to_string(), coherence_index);
    stats.insert("building".to_string(), building_ratio);
    stats.insert("gap_frequency".to_string(), gap_frequency);
    MarkerResult::new(score.max(0.0), stats)
}

/// Explicit-link strength plus term overlap with the previous sentence.
fn dependency_score(current: &SentenceView, previous: &SentenceView) -> f32 {
    let base = if lexicon::contains(&current.lower, CueCategory::StrongLink) {
        STRONG_LINK
    } else if lexicon::contains(&current.lower, CueCategory::ModerateLink) {
        MODERATE_LINK
    } else if lexicon::contains(&current.lower, CueCategory::ContrastLink) {
        CONTRAST_LINK
    } else {
        0.0
    };

    let overlap = if current.terms.is_empty() {
        0.0
    } else {
        let shared = current.terms.intersection(&previous.terms).count();
        shared as f32 / current.terms.len() as f32
    };

    (base + overlap * OVERLAP_BONUS).min(1.0)
}

/// Were the current sentence's terms previously defined, and is the link
/// made explicit?
fn necessity_score(current: &SentenceView, predecessors: &[SentenceView]) -> f32 {
    let mut necessity = 0.0;

    let reuses_defined_term = predecessors
        .iter()
        .filter(|p| p.definitional)
        .any(|p| p.terms.intersection(&current.terms).next().is_some() || defined_symbol_reused(p, current));
    if reuses_defined_term {
        necessity += DEFINED_TERM_REUSE;
    }

    if lexicon::contains(&current.lower, CueCategory::CausalMarker) {
        necessity += CAUSAL_MARKER;
    }

    necessity.min(1.0)
}

/// Short symbols ("X", "y") fall below the content-word length cutoff, so a
/// definitional sentence also matches when any of its short tokens reappear.
fn defined_symbol_reused(definition: &SentenceView, current: &SentenceView) -> bool {
    let current_words: BTreeSet<String> = segment::words(&current.lower).into_iter().collect();
    segment::words(&definition.lower)
        .into_iter()
        .filter(|w| w.len() <= 3 && !is_function_word(w))
        .any(|w| current_words.contains(&w))
}

/// Function words that carry no defined-term signal.
fn is_function_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "is" | "as" | "of" | "to" | "in" | "on" | "and" | "or" | "it" | "by"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_sentence() {
        assert_eq!(assess("").score, 0.0);
        assert_eq!(assess("One lonely sentence.").score, 0.0);
    }

    #[test]
    fn test_disconnected_sentences_score_low() {
        let result = assess("The cat sat quietly. Paris exports wine. Tuesday follows Monday.");
        assert!(result.score < 30.0, "scored {}", result.score);
        assert!(result.stat("gap_frequency").unwrap() > 0.0);
    }

    #[test]
    fn test_definitional_chain_scores_high() {
        // Reference behavior: defined term reused with causal linkage must
        // clear 70.
        let result =
            assess("X is defined as Y. Therefore, Z follows necessarily from Y, since Y entails Z.");
        assert!(result.score > 70.0, "scored {}", result.score);
        assert!(result.stat("coherence_index").unwrap() > 0.9);
    }

    #[test]
    fn test_adding_connectives_does_not_decrease_score() {
        let base = assess(
            "Entropy measures disorder in systems. \
             Entropy increases over time in closed systems.",
        );
        let linked = assess(
            "Entropy measures disorder in systems. \
             Therefore, entropy increases over time in closed systems.",
        );
        assert!(
            linked.score >= base.score,
            "linked {} < base {}",
            linked.score,
            base.score
        );
    }

    #[test]
    fn test_contrast_link_is_weak_dependency() {
        let result = assess("Theories predict outcomes. However, experiments decide.");
        // Contrast link alone (0.3) is not a building pair.
        assert_eq!(result.stat("building"), Some(0.0));
    }

    #[test]
    fn test_gap_frequency_penalizes() {
        let gappy = assess("Rain fell downtown. Quartz crystals glitter. Trumpets sound brassy.");
        let linked = assess(
            "Rain fell downtown. Moreover, the rain flooded downtown streets. \
             Consequently, downtown traffic stalled.",
        );
        assert!(linked.score > gappy.score);
    }

    #[test]
    fn test_score_in_range() {
        let result = assess(
            "A causes B, because A is defined as the driver of B. \
             Therefore B occurs whenever A occurs. \
             Thus the occurrence of B follows from A. \
             However, C remains independent.",
        );
        assert!((0.0..=100.0).contains(&result.score));
    }
}
