//! Tier calibration: pattern matching over marker scores and score
//! snapping.
//!
//! The classifier holds a fixed, ordered rule table built once at
//! construction. Rules are evaluated strictly top-to-bottom and the first
//! match wins; a higher tier's rule therefore always beats any lower
//! tier's rule, by position rather than by any numeric heuristic. On a
//! match, the aggregated score is left alone when it already sits within
//! the rule's tolerance of the target, and snapped to the target
//! otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CalibrationConfig;
use crate::markers::{MarkerKind, MarkerSet};

/// The five named score tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Architectural, load-bearing writing (target 90-98).
    BlueprintGrade,
    /// Competent analytical critique (target 80-89).
    AdvancedCritique,
    /// Well-formed but thin (target 60-79).
    SurfacePolish,
    /// Fluent prose with little inferential structure (target 40-59).
    FluentShallow,
    /// No detectable cognitive structure (target below 40).
    RandomNoise,
}

impl Tier {
    /// The canonical tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::BlueprintGrade => "blueprint-grade",
            Tier::AdvancedCritique => "advanced critique",
            Tier::SurfacePolish => "surface polish",
            Tier::FluentShallow => "fluent-shallow",
            Tier::RandomNoise => "random noise",
        }
    }

    /// Band fallback for scores no rule claimed.
    pub fn from_score(score: f32) -> Tier {
        if score >= 90.0 {
            Tier::BlueprintGrade
        } else if score >= 80.0 {
            Tier::AdvancedCritique
        } else if score >= 60.0 {
            Tier::SurfacePolish
        } else if score >= 40.0 {
            Tier::FluentShallow
        } else {
            Tier::RandomNoise
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The marker view the calibration rules read.
///
/// `originality` and `depth` are the rule-level names for epistemic
/// resistance and metacognitive awareness; `core_mean` averages the three
/// load-bearing markers (compression, continuity, originality).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierInputs {
    /// Semantic compression score.
    pub compression: f32,
    /// Inferential continuity score.
    pub continuity: f32,
    /// Epistemic resistance score, read as originality.
    pub originality: f32,
    /// Metacognitive awareness score, read as conceptual depth.
    pub depth: f32,
    /// Mean of compression, continuity, and originality.
    pub core_mean: f32,
}

impl TierInputs {
    /// Project a marker set onto the calibration view.
    pub fn from_markers(markers: &MarkerSet) -> Self {
        let compression = markers.score(MarkerKind::SemanticCompression);
        let continuity = markers.score(MarkerKind::InferentialContinuity);
        let originality = markers.score(MarkerKind::EpistemicResistance);
        let depth = markers.score(MarkerKind::MetacognitiveAwareness);
        Self {
            compression,
            continuity,
            originality,
            depth,
            core_mean: (compression + continuity + originality) / 3.0,
        }
    }
}

/// One named calibration pattern: predicate, tier, target, tolerance.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationRule {
    /// Stable rule name, surfaced in the outcome for diagnostics.
    pub name: &'static str,
    /// Tier this rule assigns.
    pub tier: Tier,
    /// Score the aggregate snaps toward.
    pub target: f32,
    /// Aggregated scores within this distance of the target stay put.
    pub tolerance: f32,
    /// The pattern itself.
    pub predicate: fn(&TierInputs) -> bool,
}

/// The classifier's decision for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationOutcome {
    /// Final score after snapping, in `[0, 100]`.
    pub score: f32,
    /// Assigned tier.
    pub tier: Tier,
    /// Name of the rule that fired, absent on band fallback.
    pub matched_rule: Option<String>,
}

/// Ordered, first-match-wins tier classifier.
///
/// # Example
///
/// ```
/// use fingerprint_engine::calibration::{CalibrationClassifier, Tier};
/// use fingerprint_engine::config::CalibrationConfig;
/// use fingerprint_engine::markers::MarkerSet;
///
/// let classifier = CalibrationClassifier::new(&CalibrationConfig::default());
/// let outcome = classifier.classify(&MarkerSet::zeroed(), 0.0);
/// assert_eq!(outcome.tier, Tier::RandomNoise);
/// ```
#[derive(Debug, Clone)]
pub struct CalibrationClassifier {
    rules: Vec<CalibrationRule>,
}

impl CalibrationClassifier {
    /// Build the fixed rule table with the configured tolerances.
    pub fn new(config: &CalibrationConfig) -> Self {
        let bp = config.blueprint_tolerance;
        let adv = config.advanced_tolerance;
        let srf = config.surface_tolerance;
        let shl = config.shallow_tolerance;

        // Order is semantics: most stringent blueprint combination first,
        // then down through the tiers. Never reorder.
        let rules = vec![
            CalibrationRule {
                name: "blueprint/exceptional",
                tier: Tier::BlueprintGrade,
                target: 95.0,
                tolerance: bp,
                predicate: |m| m.compression >= 93.0 && m.continuity >= 90.0,
            },
            CalibrationRule {
                name: "blueprint/compression",
                tier: Tier::BlueprintGrade,
                target: 94.0,
                tolerance: bp,
                predicate: |m| m.compression >= 93.0,
            },
            CalibrationRule {
                name: "blueprint/dual",
                tier: Tier::BlueprintGrade,
                target: 92.0,
                tolerance: bp,
                predicate: |m| m.compression >= 90.0 && m.continuity >= 90.0,
            },
            CalibrationRule {
                name: "blueprint/mean",
                tier: Tier::BlueprintGrade,
                target: 90.0,
                tolerance: bp,
                predicate: |m| m.core_mean >= 92.0,
            },
            CalibrationRule {
                name: "advanced/high",
                tier: Tier::AdvancedCritique,
                target: 87.0,
                tolerance: adv,
                predicate: |m| {
                    m.compression >= 85.0
                        && m.continuity >= 82.0
                        && m.compression < 90.0
                        && (m.originality >= 80.0 || m.depth >= 82.0)
                },
            },
            CalibrationRule {
                name: "advanced/standard",
                tier: Tier::AdvancedCritique,
                target: 82.0,
                tolerance: adv,
                predicate: |m| {
                    m.compression >= 80.0
                        && m.continuity >= 75.0
                        && m.core_mean >= 78.0
                        && m.core_mean < 90.0
                },
            },
            CalibrationRule {
                name: "advanced/basic",
                tier: Tier::AdvancedCritique,
                target: 80.0,
                tolerance: adv,
                predicate: |m| m.core_mean >= 75.0 && m.core_mean < 90.0,
            },
            CalibrationRule {
                name: "surface/polished",
                tier: Tier::SurfacePolish,
                target: 78.0,
                tolerance: srf,
                predicate: |m| (55.0..75.0).contains(&m.core_mean) && m.compression >= 75.0,
            },
            CalibrationRule {
                name: "surface/plain",
                tier: Tier::SurfacePolish,
                target: 70.0,
                tolerance: srf,
                predicate: |m| (55.0..75.0).contains(&m.core_mean),
            },
            CalibrationRule {
                name: "fluent-shallow",
                tier: Tier::FluentShallow,
                target: 55.0,
                tolerance: shl,
                predicate: |m| (40.0..55.0).contains(&m.core_mean),
            },
            CalibrationRule {
                name: "random-noise",
                tier: Tier::RandomNoise,
                target: 40.0,
                tolerance: shl,
                predicate: |m| m.core_mean < 40.0,
            },
        ];

        Self { rules }
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Classify a marker set against the rule table.
    ///
    /// `aggregated` is the weighted score from the aggregator. If no rule
    /// matches (possible for core means in `[90, 92)` without a blueprint
    /// combination), the aggregated score is kept and the tier derived
    /// from its band.
    pub fn classify(&self, markers: &MarkerSet, aggregated: f32) -> CalibrationOutcome {
        let inputs = TierInputs::from_markers(markers);

        for rule in &self.rules {
            if (rule.predicate)(&inputs) {
                let score = if (aggregated - rule.target).abs() <= rule.tolerance {
                    aggregated
                } else {
                    rule.target
                };
                tracing::debug!(
                    rule = rule.name,
                    tier = rule.tier.label(),
                    aggregated,
                    score,
                    "calibration rule matched"
                );
                return CalibrationOutcome {
                    score: score.clamp(0.0, 100.0),
                    tier: rule.tier,
                    matched_rule: Some(rule.name.to_string()),
                };
            }
        }

        CalibrationOutcome {
            score: aggregated.clamp(0.0, 100.0),
            tier: Tier::from_score(aggregated),
            matched_rule: None,
        }
    }
}

impl Default for CalibrationClassifier {
    fn default() -> Self {
        Self::new(&CalibrationConfig::default())
    }
}
