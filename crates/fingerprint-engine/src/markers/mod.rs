//! The six cognitive marker assessors and their shared result types.
//!
//! Each assessor is a pure function from text to a [`MarkerResult`]: a
//! bounded score in `[0, 100]` plus named supporting statistics. The six
//! assessors are independent of one another and may run in any order; a
//! [`MarkerSet`] is the join point the aggregator and classifier consume.
//!
//! All assessors share the same degenerate-input contract: zero sentences
//! (or paragraphs, for topology) produce an all-zero result, never a panic
//! or a division by zero.

pub mod asymmetry;
pub mod compression;
pub mod continuity;
pub mod metacognition;
pub mod resistance;
pub mod topology;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::concept::ConceptExtractor;

/// Identifies one of the six cognitive markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Density of inferential/synthesis/definitional cues per sentence.
    SemanticCompression,
    /// How strongly adjacent sentences depend on and build upon each other.
    InferentialContinuity,
    /// Concept-set drift and connectivity across paragraphs.
    SemanticTopology,
    /// Unevenness of per-sentence structural complexity.
    CognitiveAsymmetry,
    /// Non-obviousness and cognitive load resisting shallow reading.
    EpistemicResistance,
    /// Explicit reframing, recursion, and meta-level reference.
    MetacognitiveAwareness,
}

impl MarkerKind {
    /// All six markers, in canonical order.
    pub const ALL: [MarkerKind; 6] = [
        MarkerKind::SemanticCompression,
        MarkerKind::InferentialContinuity,
        MarkerKind::SemanticTopology,
        MarkerKind::CognitiveAsymmetry,
        MarkerKind::EpistemicResistance,
        MarkerKind::MetacognitiveAwareness,
    ];

    /// Snake-case identifier, matching the serialized field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::SemanticCompression => "semantic_compression",
            MarkerKind::InferentialContinuity => "inferential_continuity",
            MarkerKind::SemanticTopology => "semantic_topology",
            MarkerKind::CognitiveAsymmetry => "cognitive_asymmetry",
            MarkerKind::EpistemicResistance => "epistemic_resistance",
            MarkerKind::MetacognitiveAwareness => "metacognitive_awareness",
        }
    }

    /// Human-readable marker name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            MarkerKind::SemanticCompression => "semantic compression",
            MarkerKind::InferentialContinuity => "inferential continuity",
            MarkerKind::SemanticTopology => "semantic topology",
            MarkerKind::CognitiveAsymmetry => "cognitive asymmetry",
            MarkerKind::EpistemicResistance => "epistemic resistance",
            MarkerKind::MetacognitiveAwareness => "metacognitive awareness",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One marker's outcome: a bounded score plus named statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerResult {
    /// Marker score in `[0, 100]`.
    pub score: f32,
    /// Dimension-specific supporting statistics (deterministic key order).
    pub stats: BTreeMap<String, f32>,
}

impl MarkerResult {
    /// Build a result, clamping the score to `[0, 100]` and replacing
    /// NaN/Inf with 0.0.
    pub fn new(score: f32, stats: BTreeMap<String, f32>) -> Self {
        let score = sanitize(score);
        let stats = stats.into_iter().map(|(k, v)| (k, sanitize_stat(v))).collect();
        Self { score, stats }
    }

    /// An all-zero result with the given stat keys, used for degenerate
    /// input.
    pub fn zeroed(stat_keys: &[&str]) -> Self {
        Self {
            score: 0.0,
            stats: stat_keys.iter().map(|k| (k.to_string(), 0.0)).collect(),
        }
    }

    /// Look up a supporting statistic by name.
    pub fn stat(&self, key: &str) -> Option<f32> {
        self.stats.get(key).copied()
    }
}

/// Clamp a score into `[0, 100]`, mapping NaN/Inf to 0.0.
fn sanitize(score: f32) -> f32 {
    if !score.is_finite() {
        tracing::warn!(score, "marker score is NaN/Inf, using fallback 0.0");
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Statistics keep their natural range but never carry NaN/Inf.
fn sanitize_stat(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The complete marker assessment for a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    /// Semantic compression assessment.
    pub semantic_compression: MarkerResult,
    /// Inferential continuity assessment.
    pub inferential_continuity: MarkerResult,
    /// Semantic topology assessment.
    pub semantic_topology: MarkerResult,
    /// Cognitive asymmetry assessment.
    pub cognitive_asymmetry: MarkerResult,
    /// Epistemic resistance assessment.
    pub epistemic_resistance: MarkerResult,
    /// Metacognitive awareness assessment.
    pub metacognitive_awareness: MarkerResult,
}

impl MarkerSet {
    /// The score for one marker.
    pub fn score(&self, kind: MarkerKind) -> f32 {
        self.result(kind).score
    }

    /// The full result for one marker.
    pub fn result(&self, kind: MarkerKind) -> &MarkerResult {
        match kind {
            MarkerKind::SemanticCompression => &self.semantic_compression,
            MarkerKind::InferentialContinuity => &self.inferential_continuity,
            MarkerKind::SemanticTopology => &self.semantic_topology,
            MarkerKind::CognitiveAsymmetry => &self.cognitive_asymmetry,
            MarkerKind::EpistemicResistance => &self.epistemic_resistance,
            MarkerKind::MetacognitiveAwareness => &self.metacognitive_awareness,
        }
    }

    /// All six scores in [`MarkerKind::ALL`] order.
    pub fn scores(&self) -> [f32; 6] {
        let mut out = [0.0; 6];
        for (slot, kind) in out.iter_mut().zip(MarkerKind::ALL) {
            *slot = self.score(kind);
        }
        out
    }

    /// An all-zero marker set, the result for degenerate input.
    pub fn zeroed() -> Self {
        Self {
            semantic_compression: MarkerResult::zeroed(compression::STAT_KEYS),
            inferential_continuity: MarkerResult::zeroed(continuity::STAT_KEYS),
            semantic_topology: MarkerResult::zeroed(topology::STAT_KEYS),
            cognitive_asymmetry: MarkerResult::zeroed(asymmetry::STAT_KEYS),
            epistemic_resistance: MarkerResult::zeroed(resistance::STAT_KEYS),
            metacognitive_awareness: MarkerResult::zeroed(metacognition::STAT_KEYS),
        }
    }
}

/// Run all six assessors over the text.
///
/// The assessors are independent; this runs them sequentially since each is
/// linear in the sentence count and the join point is immediate.
pub fn assess_all(text: &str, extractor: &ConceptExtractor) -> MarkerSet {
    MarkerSet {
        semantic_compression: compression::assess(text),
        inferential_continuity: continuity::assess(text),
        semantic_topology: topology::assess(text, extractor),
        cognitive_asymmetry: asymmetry::assess(text),
        epistemic_resistance: resistance::assess(text),
        metacognitive_awareness: metacognition::assess(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_kind_roundtrip_names() {
        for kind in MarkerKind::ALL {
            assert!(!kind.as_str().is_empty());
            assert!(kind.as_str().contains('_') || kind.as_str().len() > 5);
            assert_eq!(kind.display_name().replace(' ', "_"), kind.as_str());
        }
    }

    #[test]
    fn test_marker_result_clamps_score() {
        let result = MarkerResult::new(140.0, BTreeMap::new());
        assert_eq!(result.score, 100.0);
        let result = MarkerResult::new(-3.0, BTreeMap::new());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_marker_result_sanitizes_nan() {
        let mut stats = BTreeMap::new();
        stats.insert("density".to_string(), f32::NAN);
        let result = MarkerResult::new(f32::NAN, stats);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.stat("density"), Some(0.0));
    }

    #[test]
    fn test_zeroed_marker_set() {
        let set = MarkerSet::zeroed();
        for kind in MarkerKind::ALL {
            assert_eq!(set.score(kind), 0.0);
        }
    }

    #[test]
    fn test_assess_all_empty_text() {
        let extractor = ConceptExtractor::new();
        let set = assess_all("", &extractor);
        assert_eq!(set, MarkerSet::zeroed());
    }

    #[test]
    fn test_assess_all_scores_in_range() {
        let extractor = ConceptExtractor::new();
        let text = "Entropy is defined as disorder. Therefore, order decreases, \
                    since entropy entails dissipation. However, local structure persists.";
        let set = assess_all(text, &extractor);
        for kind in MarkerKind::ALL {
            let score = set.score(kind);
            assert!(
                (0.0..=100.0).contains(&score),
                "{} score {} out of range",
                kind,
                score
            );
        }
    }

    #[test]
    fn test_marker_set_serialization() {
        let set = MarkerSet::zeroed();
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("semantic_compression"));
        let back: MarkerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
