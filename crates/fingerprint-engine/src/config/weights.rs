//! Aggregation weights for the six markers.

use serde::{Deserialize, Serialize};

use crate::markers::MarkerKind;

/// Weights applied to marker scores during aggregation.
///
/// The defaults are the reference calibration. `cognitive_asymmetry` is
/// deliberately 0.0: the marker is retained in the data model for
/// observability but excluded from the weighted sum after it produced
/// false positives in calibration.
///
/// # Example
///
/// ```
/// use fingerprint_engine::config::AggregationWeights;
///
/// let weights = AggregationWeights::default();
/// assert!(weights.validate().is_ok());
/// assert_eq!(weights.cognitive_asymmetry, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregationWeights {
    /// Weight of semantic compression.
    pub semantic_compression: f32,
    /// Weight of inferential continuity.
    pub inferential_continuity: f32,
    /// Weight of semantic topology.
    pub semantic_topology: f32,
    /// Weight of cognitive asymmetry (0.0: observability only).
    pub cognitive_asymmetry: f32,
    /// Weight of epistemic resistance.
    pub epistemic_resistance: f32,
    /// Weight of metacognitive awareness.
    pub metacognitive_awareness: f32,
}

impl Default for AggregationWeights {
    fn default() -> Self {
        Self {
            semantic_compression: 0.30,
            inferential_continuity: 0.25,
            semantic_topology: 0.10,
            cognitive_asymmetry: 0.00,
            epistemic_resistance: 0.20,
            metacognitive_awareness: 0.15,
        }
    }
}

impl AggregationWeights {
    /// The weight for one marker.
    pub fn weight(&self, kind: MarkerKind) -> f32 {
        match kind {
            MarkerKind::SemanticCompression => self.semantic_compression,
            MarkerKind::InferentialContinuity => self.inferential_continuity,
            MarkerKind::SemanticTopology => self.semantic_topology,
            MarkerKind::CognitiveAsymmetry => self.cognitive_asymmetry,
            MarkerKind::EpistemicResistance => self.epistemic_resistance,
            MarkerKind::MetacognitiveAwareness => self.metacognitive_awareness,
        }
    }

    /// Sum of all six weights.
    pub fn sum(&self) -> f32 {
        MarkerKind::ALL.iter().map(|&k| self.weight(k)).sum()
    }

    /// Validate the weights: all non-negative, summing to 1.0 within 1e-3.
    pub fn validate(&self) -> Result<(), String> {
        for kind in MarkerKind::ALL {
            let w = self.weight(kind);
            if !w.is_finite() || w < 0.0 {
                return Err(format!("weight '{}' must be finite and >= 0, got {}", kind.as_str(), w));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(format!("weights must sum to 1.0, got {}", sum));
        }
        Ok(())
    }
}
