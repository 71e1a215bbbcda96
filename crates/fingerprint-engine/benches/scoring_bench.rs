//! Scoring benchmark suite.
//!
//! The pipeline is expected to be linear in sentence count; the sized
//! benchmarks make regressions away from that visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fingerprint_engine::{concept::ConceptExtractor, markers, ScoringEngine};

// =============================================================================
// Helper Functions: Deterministic Data Generation
// =============================================================================

fn generate_text(sentences: usize) -> String {
    let templates = [
        "Entropy is defined as the measure of disorder in a closed system. ",
        "Therefore, macroscopic order decays, since dissipation entails loss. ",
        "Put differently, the concept of emergence reframes this argument. ",
        "However, local structure persists (a counterintuitive result). ",
        "If energy disperses, then Information Theory bounds what persists. ",
    ];
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(templates[i % templates.len()]);
        if i % 7 == 6 {
            text.push_str("\n\n");
        }
    }
    text
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn bench_full_scoring(c: &mut Criterion) {
    let engine = ScoringEngine::with_defaults();
    let mut group = c.benchmark_group("score");
    for sentences in [10usize, 100, 500] {
        let text = generate_text(sentences);
        group.throughput(Throughput::Elements(sentences as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sentences), &text, |b, text| {
            b.iter(|| engine.score(black_box(text)))
        });
    }
    group.finish();
}

fn bench_marker_assessment(c: &mut Criterion) {
    let extractor = ConceptExtractor::new();
    let text = generate_text(100);
    c.bench_function("assess_all_100_sentences", |b| {
        b.iter(|| markers::assess_all(black_box(&text), &extractor))
    });
}

fn bench_concept_extraction(c: &mut Criterion) {
    let extractor = ConceptExtractor::new();
    let text = generate_text(100);
    c.bench_function("concept_extract_100_sentences", |b| {
        b.iter(|| extractor.extract(black_box(&text)))
    });
}

fn bench_empty_input(c: &mut Criterion) {
    let engine = ScoringEngine::with_defaults();
    c.bench_function("score_empty", |b| b.iter(|| engine.score(black_box(""))));
}

criterion_group!(
    benches,
    bench_full_scoring,
    bench_marker_assessment,
    bench_concept_extraction,
    bench_empty_input
);
criterion_main!(benches);
