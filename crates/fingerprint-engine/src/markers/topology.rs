//! Semantic topology: how the text's concept space is laid out.
//!
//! Consecutive paragraphs are compared as concept sets. `gradient` measures
//! how far each paragraph moves from the previous one (1 - Jaccard
//! similarity), `curvature` how sharply that movement itself changes, and
//! `connectivity` how much the extracted concepts share constituent words.
//! This is the only marker that reads paragraph structure.

use std::collections::BTreeSet;
use std::collections::BTreeMap;

use crate::concept::ConceptExtractor;
use crate::segment;

use super::MarkerResult;

/// Statistic keys reported by this assessor.
pub const STAT_KEYS: &[&str] = &["connectivity", "curvature", "gradient", "node_density"];

/// Assess semantic topology.
///
/// The score is `gradient*30 + curvature*25 + node_density*1000 +
/// connectivity*20`, clamped to `[0, 100]`. Node density is distinct
/// concepts per character, hence the large scale factor.
pub fn assess(text: &str, extractor: &ConceptExtractor) -> MarkerResult {
    let paragraphs = segment::split_paragraphs(text);
    if paragraphs.is_empty() {
        return MarkerResult::zeroed(STAT_KEYS);
    }

    let paragraph_concepts: Vec<BTreeSet<String>> =
        paragraphs.iter().map(|p| extractor.extract(p)).collect();
    let all_concepts = extractor.extract(text);

    // Mean concept-set distance between consecutive paragraphs.
    let gradients: Vec<f32> = paragraph_concepts
        .windows(2)
        .map(|w| 1.0 - jaccard(&w[0], &w[1]))
        .collect();
    let gradient = mean(&gradients);

    // Mean absolute change between consecutive gradients.
    let deltas: Vec<f32> = gradients.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let curvature = mean(&deltas);

    let chars = text.chars().count();
    let node_density = if chars == 0 {
        0.0
    } else {
        all_concepts.len() as f32 / chars as f32
    };

    let connectivity = connectivity(&all_concepts);

    let score = gradient * 30.0 + curvature * 25.0 + node_density * 1000.0 + connectivity * 20.0;

    let mut stats = BTreeMap::new();
    stats.insert("gradient".to_string(), gradient);
    stats.insert("curvature".to_string(), curvature);
    stats.insert("node_density".to_string(), node_density);
    stats.insert("connectivity".to_string(), connectivity);
    MarkerResult::new(score, stats)
}

/// Jaccard similarity of two concept sets. Two empty sets are identical.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        return 1.0;
    }
    intersection as f32 / union as f32
}

/// Fraction of concept pairs sharing at least one constituent word.
fn connectivity(concepts: &BTreeSet<String>) -> f32 {
    if concepts.len() < 2 {
        return 0.0;
    }
    let word_sets: Vec<BTreeSet<&str>> = concepts
        .iter()
        .map(|c| c.split_whitespace().collect())
        .collect();

    let mut shared = 0usize;
    let mut pairs = 0usize;
    for i in 0..word_sets.len() {
        for j in (i + 1)..word_sets.len() {
            pairs += 1;
            if word_sets[i].intersection(&word_sets[j]).next().is_some() {
                shared += 1;
            }
        }
    }
    shared as f32 / pairs as f32
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}
