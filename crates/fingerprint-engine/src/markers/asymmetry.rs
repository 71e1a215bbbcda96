//! Cognitive asymmetry: unevenness of structural effort across sentences.
//!
//! Uniformly simple or uniformly ornate prose is symmetric; prose that
//! alternates short assertions with heavily subordinated constructions
//! shows effort spikes. Retained in the marker set for observability even
//! though its default aggregation weight is zero.

use std::collections::BTreeMap;

use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["complexity_spikes", "effort_gradient", "weight_distribution"];

const WORD_WEIGHT: f32 = 0.1;
const CLAUSE_WEIGHT: f32 = 0.3;
const PARENTHETICAL_WEIGHT: f32 = 0.5;

/// Assess cognitive asymmetry.
///
/// Per-sentence complexity is `words*0.1 + clauses*0.3 +
/// parentheticals*0.5`. The score combines the population standard
/// deviation of complexities (`weight_distribution`), the mean absolute
/// consecutive difference (`effort_gradient`), and the fraction of
/// sentences spiking above mean + 2 sigma: `sd*20 + gradient*30 +
/// spike_fraction*50`, clamped to `[0, 100]`.
pub fn assess(text: &str) -> MarkerResult {
    let sentences = segment::split_sentences(text);
    if sentences.is_empty() {
        return MarkerResult::zeroed(STAT_KEYS);
    }
    let total = sentences.len() as f32;

    let complexities: Vec<f32> = sentences.iter().map(|s| complexity(s)).collect();

    let mean = complexities.iter().sum::<f32>() / total;
    let variance = complexities.iter().map(|c| (c - mean).powi(2)).sum::<f32>() / total;
    let weight_distribution = variance.sqrt();

    let effort_gradient = if complexities.len() < 2 {
        0.0
    } else {
        complexities
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum::<f32>()
            / (complexities.len() - 1) as f32
    };

    let spike_threshold = mean + 2.0 * weight_distribution;
    let spikes = if weight_distribution > 0.0 {
        complexities.iter().filter(|&&c| c > spike_threshold).count()
    } else {
        0
    };

    let score =
        weight_distribution * 20.0 + effort_gradient * 30.0 + (spikes as f32 / total) * 50.0;

    let mut stats = BTreeMap::new();
    stats.insert("weight_distribution".to_string(), weight_distribution);
    stats.insert("effort_gradient".to_string(), effort_gradient);
    stats.insert("complexity_spikes".to_string(), spikes as f32);
    MarkerResult::new(score, stats)
}

/// Structural complexity of one sentence.
fn complexity(sentence: &str) -> f32 {
    let words = segment::words(sentence).len() as f32;
    let clauses = (segment::clause_separators(sentence) + 1) as f32;
    let parentheticals = segment::parentheticals(sentence) as f32;
    words * WORD_WEIGHT + clauses * CLAUSE_WEIGHT + parentheticals * PARENTHETICAL_WEIGHT
}
