//! Accumulated statistics across scoring calls.
//!
//! These track AGGREGATE engine behavior over many texts: call counts,
//! running averages, tier distribution, latency. A single call's outcome
//! lives in [`crate::processor::ScoringResult`]. Metrics are observability
//! only and never feed back into scoring.

use serde::{Deserialize, Serialize};

use crate::calibration::Tier;

/// Distribution of tier assignments across scored texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    /// Texts assigned blueprint-grade.
    pub blueprint_grade: u64,
    /// Texts assigned advanced critique.
    pub advanced_critique: u64,
    /// Texts assigned surface polish.
    pub surface_polish: u64,
    /// Texts assigned fluent-shallow.
    pub fluent_shallow: u64,
    /// Texts assigned random noise.
    pub random_noise: u64,
}

impl TierDistribution {
    /// Record one tier assignment.
    pub fn record(&mut self, tier: Tier) {
        match tier {
            Tier::BlueprintGrade => self.blueprint_grade += 1,
            Tier::AdvancedCritique => self.advanced_critique += 1,
            Tier::SurfacePolish => self.surface_polish += 1,
            Tier::FluentShallow => self.fluent_shallow += 1,
            Tier::RandomNoise => self.random_noise += 1,
        }
    }

    /// Total texts recorded.
    pub fn total(&self) -> u64 {
        self.blueprint_grade
            + self.advanced_critique
            + self.surface_polish
            + self.fluent_shallow
            + self.random_noise
    }

    /// The most frequent tier, if any text was recorded. Ties resolve to
    /// the higher tier.
    pub fn dominant(&self) -> Option<Tier> {
        if self.total() == 0 {
            return None;
        }
        let entries = [
            (Tier::BlueprintGrade, self.blueprint_grade),
            (Tier::AdvancedCritique, self.advanced_critique),
            (Tier::SurfacePolish, self.surface_polish),
            (Tier::FluentShallow, self.fluent_shallow),
            (Tier::RandomNoise, self.random_noise),
        ];
        let mut best = entries[0];
        for entry in &entries[1..] {
            if entry.1 > best.1 {
                best = *entry;
            }
        }
        Some(best.0)
    }
}

/// Accumulated statistics from scoring computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringMetrics {
    /// Total number of scoring calls recorded.
    pub computation_count: u64,

    /// Running average of the overall score.
    pub avg_overall_score: f32,

    /// Running average of marker-score dispersion.
    pub avg_variance: f32,

    /// Distribution of tier assignments.
    pub tier_distribution: TierDistribution,

    /// Average scoring latency in microseconds.
    pub avg_latency_us: f64,

    /// Maximum scoring latency in microseconds.
    pub max_latency_us: u64,
}

impl Default for ScoringMetrics {
    fn default() -> Self {
        Self {
            computation_count: 0,
            avg_overall_score: 0.0,
            avg_variance: 0.0,
            tier_distribution: TierDistribution::default(),
            avg_latency_us: 0.0,
            max_latency_us: 0,
        }
    }
}

impl ScoringMetrics {
    /// Create new empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scoring call.
    pub fn record(&mut self, overall: u8, variance: f32, tier: Tier, latency_us: u64) {
        let n = self.computation_count as f32;
        self.avg_overall_score = (self.avg_overall_score * n + overall as f32) / (n + 1.0);
        self.avg_variance = (self.avg_variance * n + variance) / (n + 1.0);
        self.avg_latency_us =
            (self.avg_latency_us * self.computation_count as f64 + latency_us as f64)
                / (self.computation_count + 1) as f64;
        self.max_latency_us = self.max_latency_us.max(latency_us);
        self.tier_distribution.record(tier);
        self.computation_count += 1;
    }

    /// Averages are in range and counters are consistent.
    pub fn is_healthy(&self) -> bool {
        (0.0..=100.0).contains(&self.avg_overall_score)
            && self.avg_variance >= 0.0
            && self.tier_distribution.total() == self.computation_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let metrics = ScoringMetrics::new();
        assert_eq!(metrics.computation_count, 0);
        assert!(metrics.is_healthy());
        assert_eq!(metrics.tier_distribution.dominant(), None);
    }

    #[test]
    fn test_record_updates_averages() {
        let mut metrics = ScoringMetrics::new();
        metrics.record(80, 10.0, Tier::AdvancedCritique, 500);
        metrics.record(40, 30.0, Tier::RandomNoise, 1500);

        assert_eq!(metrics.computation_count, 2);
        assert!((metrics.avg_overall_score - 60.0).abs() < 1e-4);
        assert!((metrics.avg_variance - 20.0).abs() < 1e-4);
        assert!((metrics.avg_latency_us - 1000.0).abs() < 1e-6);
        assert_eq!(metrics.max_latency_us, 1500);
        assert!(metrics.is_healthy());
    }

    #[test]
    fn test_tier_distribution_counts() {
        let mut dist = TierDistribution::default();
        dist.record(Tier::SurfacePolish);
        dist.record(Tier::SurfacePolish);
        dist.record(Tier::RandomNoise);
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.dominant(), Some(Tier::SurfacePolish));
    }

    #[test]
    fn test_dominant_tie_resolves_high() {
        let mut dist = TierDistribution::default();
        dist.record(Tier::BlueprintGrade);
        dist.record(Tier::RandomNoise);
        assert_eq!(dist.dominant(), Some(Tier::BlueprintGrade));
    }

    #[test]
    fn test_metrics_serialization() {
        let mut metrics = ScoringMetrics::new();
        metrics.record(70, 5.0, Tier::SurfacePolish, 250);
        let json = serde_json::to_string(&metrics).unwrap();
        let back: ScoringMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
