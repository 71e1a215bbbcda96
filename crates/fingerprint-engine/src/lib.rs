//! Cognitive fingerprint scoring engine.
//!
//! A purely algorithmic (non-LLM) text analyzer: raw prose goes in, a
//! calibrated cognitive-sophistication score and tier come out. The
//! pipeline is one-directional:
//!
//! segmentation -> concept extraction -> six marker assessors ->
//! weighted aggregation -> tier calibration -> report.
//!
//! # Modules
//!
//! - [`config`]: Configuration types for all engine subsystems
//! - [`error`]: Error types and result aliases
//! - [`segment`]: Sentence/paragraph/word segmentation
//! - [`lexicon`]: Named lexical cue categories
//! - [`concept`]: Concept extraction
//! - [`markers`]: The six marker assessors
//! - [`aggregate`]: Weighted score aggregation
//! - [`calibration`]: Tier patterns and score snapping
//! - [`report`]: Natural-language explanations
//! - [`metrics`]: Accumulated cross-call statistics
//! - [`processor`]: The [`ScoringEngine`] orchestrator
//!
//! # Guarantees
//!
//! Scoring is a total function over all strings: degenerate input yields
//! zeros, never an error; every score is clamped to `[0, 100]` and never
//! NaN; identical input always produces a bit-identical result.
//!
//! # Example
//!
//! ```
//! use fingerprint_engine::{score, ScoringEngine};
//!
//! // One-shot scoring with defaults.
//! let result = score("X is defined as Y. Therefore, Z follows from Y, since Y entails Z.");
//! assert!(result.overall_score <= 100);
//!
//! // Reusable engine for many texts.
//! let engine = ScoringEngine::with_defaults();
//! assert_eq!(engine.score("").overall_score, 0);
//! ```

pub mod aggregate;
pub mod calibration;
pub mod concept;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod markers;
pub mod metrics;
pub mod processor;
pub mod report;
pub mod segment;

// Re-export commonly used types.
pub use aggregate::{aggregate as aggregate_markers, Aggregate};
pub use calibration::{CalibrationClassifier, CalibrationOutcome, Tier, TierInputs};
pub use concept::ConceptExtractor;
pub use config::{AggregationWeights, CalibrationConfig, EngineConfig, ReportThresholds};
pub use error::{FingerprintError, FingerprintResult};
pub use markers::{MarkerKind, MarkerResult, MarkerSet};
pub use metrics::{ScoringMetrics, TierDistribution};
pub use processor::{score, ScoringEngine, ScoringResult};
