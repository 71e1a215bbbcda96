//! Weighted aggregation of the six marker scores.
//!
//! The weighted sum is followed by a deliberate non-linear correction:
//! scores above 85 are boosted by 10% (capped at 100) and scores strictly
//! between 70 and 85 are damped by 10%. The correction separates
//! exceptional text from competent-but-unremarkable text and is part of
//! the reference behavior, not an implementation artifact.

use serde::{Deserialize, Serialize};

use crate::config::AggregationWeights;
use crate::markers::{MarkerKind, MarkerSet};

/// Weighted score threshold above which the boost applies.
const BOOST_ABOVE: f32 = 85.0;
/// Boost multiplier for exceptional scores.
const BOOST: f32 = 1.1;
/// Lower bound (exclusive) of the damping band.
const DAMP_ABOVE: f32 = 70.0;
/// Damping multiplier for competent-but-unremarkable scores.
const DAMP: f32 = 0.9;

/// The aggregation outcome: a weighted score and a dispersion diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Weighted, non-linearly corrected score in `[0, 100]`.
    pub weighted_score: f32,
    /// Population standard deviation of the six marker scores.
    ///
    /// Diagnostic only; tier decisions never read it.
    pub variance: f32,
}

/// Combine the six marker scores into an overall weighted score.
///
/// Any non-finite intermediate is replaced with 0.0 and logged; the result
/// is always finite and in `[0, 100]`.
///
/// # Example
///
/// ```
/// use fingerprint_engine::aggregate::aggregate;
/// use fingerprint_engine::config::AggregationWeights;
/// use fingerprint_engine::markers::MarkerSet;
///
/// let outcome = aggregate(&MarkerSet::zeroed(), &AggregationWeights::default());
/// assert_eq!(outcome.weighted_score, 0.0);
/// assert_eq!(outcome.variance, 0.0);
/// ```
pub fn aggregate(markers: &MarkerSet, weights: &AggregationWeights) -> Aggregate {
    let weighted: f32 = MarkerKind::ALL
        .iter()
        .map(|&kind| markers.score(kind) * weights.weight(kind))
        .sum();

    let weighted = if weighted.is_finite() {
        weighted
    } else {
        tracing::warn!("weighted score is NaN/Inf, using fallback 0.0");
        0.0
    };

    let corrected = if weighted > BOOST_ABOVE {
        (weighted * BOOST).min(100.0)
    } else if weighted > DAMP_ABOVE && weighted < BOOST_ABOVE {
        weighted * DAMP
    } else {
        weighted
    };

    Aggregate {
        weighted_score: corrected.clamp(0.0, 100.0),
        variance: score_deviation(&markers.scores()),
    }
}

/// Population standard deviation of the marker scores.
fn score_deviation(scores: &[f32; 6]) -> f32 {
    let mean = scores.iter().sum::<f32>() / scores.len() as f32;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / scores.len() as f32;
    let deviation = variance.sqrt();
    if deviation.is_finite() {
        deviation
    } else {
        tracing::warn!("score deviation is NaN/Inf, using fallback 0.0");
        0.0
    }
}
