//! Report generator thresholds.

use serde::{Deserialize, Serialize};

/// Marker thresholds above which the report calls out a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportThresholds {
    /// Call out semantic compression above this score.
    pub compression: f32,
    /// Call out inferential continuity above this score.
    pub continuity: f32,
    /// Call out epistemic resistance above this score.
    pub resistance: f32,
    /// Call out metacognitive awareness above this score.
    pub metacognition: f32,
    /// Call out semantic topology above this score.
    pub topology: f32,
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            compression: 80.0,
            continuity: 80.0,
            resistance: 75.0,
            metacognition: 70.0,
            topology: 60.0,
        }
    }
}

impl ReportThresholds {
    /// Validate the thresholds: all within `[0, 100]`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("compression", self.compression),
            ("continuity", self.continuity),
            ("resistance", self.resistance),
            ("metacognition", self.metacognition),
            ("topology", self.topology),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(format!("report threshold '{}' must be in [0, 100], got {}", name, value));
            }
        }
        Ok(())
    }
}
