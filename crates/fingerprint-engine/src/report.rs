//! Natural-language explanation of a scoring result.
//!
//! Fixed templates keyed by which markers exceed the configured
//! thresholds. Deterministic: the same marker set always yields the same
//! string, with markers reported in canonical order.

use crate::calibration::Tier;
use crate::config::ReportThresholds;
use crate::markers::{MarkerKind, MarkerSet};

/// Build the explanation string for a scored text.
///
/// # Example
///
/// ```
/// use fingerprint_engine::calibration::Tier;
/// use fingerprint_engine::config::ReportThresholds;
/// use fingerprint_engine::markers::MarkerSet;
/// use fingerprint_engine::report::explain;
///
/// let text = explain(&MarkerSet::zeroed(), Tier::RandomNoise, 0, &ReportThresholds::default());
/// assert!(text.contains("random noise"));
/// ```
pub fn explain(
    markers: &MarkerSet,
    tier: Tier,
    overall: u8,
    thresholds: &ReportThresholds,
) -> String {
    let mut parts = vec![tier_lead(tier, overall)];

    for kind in MarkerKind::ALL {
        let score = markers.score(kind);
        if let Some(sentence) = marker_callout(kind, score, thresholds) {
            parts.push(sentence);
        }
    }

    if parts.len() == 1 {
        parts.push("No single marker stands out.".to_string());
    }

    parts.join(" ")
}

fn tier_lead(tier: Tier, overall: u8) -> String {
    let description = match tier {
        Tier::BlueprintGrade => "the text reads as load-bearing, architectural reasoning",
        Tier::AdvancedCritique => "the text sustains a genuine analytical argument",
        Tier::SurfacePolish => "the text is well-formed but carries limited inferential weight",
        Tier::FluentShallow => "the text is fluent without building on itself",
        Tier::RandomNoise => "no sustained cognitive structure was detected",
    };
    format!("Assessed as {} ({}/100): {}.", tier.label(), overall, description)
}

fn marker_callout(kind: MarkerKind, score: f32, thresholds: &ReportThresholds) -> Option<String> {
    let sentence = match kind {
        MarkerKind::SemanticCompression if score > thresholds.compression => format!(
            "Exceptional semantic compression ({:.0}/100): sentences perform real inferential work.",
            score
        ),
        MarkerKind::InferentialContinuity if score > thresholds.continuity => format!(
            "Strong inferential continuity ({:.0}/100): each sentence builds on what precedes it.",
            score
        ),
        MarkerKind::EpistemicResistance if score > thresholds.resistance => format!(
            "High epistemic resistance ({:.0}/100): claims resist effortless agreement.",
            score
        ),
        MarkerKind::MetacognitiveAwareness if score > thresholds.metacognition => format!(
            "Marked metacognitive awareness ({:.0}/100): the text reasons about its own reasoning.",
            score
        ),
        MarkerKind::SemanticTopology if score > thresholds.topology => format!(
            "Rich semantic topology ({:.0}/100): the concept space moves and stays connected.",
            score
        ),
        _ => return None,
    };
    Some(sentence)
}
