//! ScoringEngine - the scoring pipeline orchestrator.
//!
//! Wires the stages together: segmentation, concept extraction, the six
//! marker assessors, weighted aggregation, tier calibration, and report
//! generation. The pipeline is a pure function of the input text; the
//! engine only mutates itself when the caller opts in to metrics
//! recording.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::calibration::{CalibrationClassifier, Tier};
use crate::concept::ConceptExtractor;
use crate::config::EngineConfig;
use crate::error::FingerprintResult;
use crate::markers::{self, MarkerKind, MarkerSet};
use crate::metrics::ScoringMetrics;
use crate::report;
use crate::segment;
use crate::FingerprintError;

/// The complete scoring outcome for one text. Immutable value, produced
/// once per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Final calibrated score, an integer in `[0, 100]`.
    pub overall_score: u8,
    /// All six marker assessments.
    pub marker_set: MarkerSet,
    /// Population standard deviation of the marker scores (diagnostic).
    pub variance: f32,
    /// Assigned tier.
    pub tier: Tier,
    /// Name of the calibration rule that fired, if any.
    pub matched_rule: Option<String>,
    /// Short natural-language explanation.
    pub explanation: String,
}

impl ScoringResult {
    /// The canonical tier label string.
    pub fn tier_label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Cognitive fingerprint scoring engine.
///
/// Construction compiles the concept patterns and builds the calibration
/// rule table once; scoring allocates only per-call working state. The
/// engine holds no mutable scoring state, so one instance can serve
/// concurrent callers through `&self`.
///
/// # Example
///
/// ```
/// use fingerprint_engine::processor::ScoringEngine;
///
/// let engine = ScoringEngine::with_defaults();
/// let result = engine.score("Entropy is defined as disorder. Thus, order decays, since entropy entails dissipation.");
/// assert!(result.overall_score <= 100);
/// assert!(result.marker_set.semantic_compression.score > 0.0);
/// ```
#[derive(Debug)]
pub struct ScoringEngine {
    extractor: ConceptExtractor,
    classifier: CalibrationClassifier,
    config: EngineConfig,
    metrics: ScoringMetrics,
}

impl ScoringEngine {
    /// Create a new engine with the given configuration.
    /// Panics if config validation fails. Use `try_new()` for fallible
    /// construction.
    pub fn new(config: EngineConfig) -> Self {
        config.validate().expect("EngineConfig validation failed");
        Self::from_config(config)
    }

    /// Try to create an engine, returning an error if config is invalid.
    pub fn try_new(config: EngineConfig) -> FingerprintResult<Self> {
        config.validate().map_err(FingerprintError::ConfigError)?;
        Ok(Self::from_config(config))
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            extractor: ConceptExtractor::new(),
            classifier: CalibrationClassifier::new(&config.calibration),
            config,
            metrics: ScoringMetrics::new(),
        }
    }

    /// Score a text. Pure: identical input always yields an identical
    /// result, and the engine itself is not mutated.
    ///
    /// Degenerate input (empty, whitespace-only, no sentences) produces an
    /// all-zero result with the `random noise` tier rather than an error,
    /// and bypasses calibration so the zero score is not snapped upward.
    pub fn score(&self, text: &str) -> ScoringResult {
        if segment::split_sentences(text).is_empty() {
            let marker_set = MarkerSet::zeroed();
            let explanation =
                report::explain(&marker_set, Tier::RandomNoise, 0, &self.config.report);
            return ScoringResult {
                overall_score: 0,
                marker_set,
                variance: 0.0,
                tier: Tier::RandomNoise,
                matched_rule: None,
                explanation,
            };
        }

        let marker_set = markers::assess_all(text, &self.extractor);
        if self.config.debug {
            for kind in MarkerKind::ALL {
                tracing::debug!(marker = kind.as_str(), score = marker_set.score(kind));
            }
        }

        let aggregated = aggregate(&marker_set, &self.config.weights);
        let outcome = self.classifier.classify(&marker_set, aggregated.weighted_score);
        let overall_score = outcome.score.round().clamp(0.0, 100.0) as u8;
        let explanation =
            report::explain(&marker_set, outcome.tier, overall_score, &self.config.report);

        ScoringResult {
            overall_score,
            marker_set,
            variance: aggregated.variance,
            tier: outcome.tier,
            matched_rule: outcome.matched_rule,
            explanation,
        }
    }

    /// Score a text and record the call into the engine's metrics,
    /// including wall-clock latency.
    pub fn score_with_metrics(&mut self, text: &str) -> ScoringResult {
        let start = Instant::now();
        let result = self.score(text);
        let latency_us = start.elapsed().as_micros().min(u128::from(u64::MAX)) as u64;
        self.metrics
            .record(result.overall_score, result.variance, result.tier, latency_us);
        result
    }

    /// Accumulated metrics across `score_with_metrics` calls.
    pub fn metrics(&self) -> &ScoringMetrics {
        &self.metrics
    }

    /// Reset accumulated metrics.
    pub fn reset_metrics(&mut self) {
        self.metrics = ScoringMetrics::new();
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Score a text with the default configuration.
///
/// Convenience wrapper; construct a [`ScoringEngine`] to amortize pattern
/// compilation across calls.
///
/// # Example
///
/// ```
/// use fingerprint_engine::score;
///
/// let result = score("");
/// assert_eq!(result.overall_score, 0);
/// ```
pub fn score(text: &str) -> ScoringResult {
    ScoringEngine::with_defaults().score(text)
}
