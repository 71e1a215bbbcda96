//! Engine configuration types.
//!
//! All scoring constants that are calibration rather than formula structure
//! live here: aggregation weights, calibration snap tolerances, and report
//! thresholds. Defaults reproduce the reference behavior; `validate()`
//! guards every construction path.

mod calibration;
mod report;
mod weights;

#[cfg(test)]
mod tests;

pub use self::calibration::CalibrationConfig;
pub use self::report::ReportThresholds;
pub use self::weights::AggregationWeights;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
///
/// # Example
///
/// ```
/// use fingerprint_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weights.cognitive_asymmetry, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Marker aggregation weights.
    pub weights: AggregationWeights,

    /// Calibration snapping settings.
    pub calibration: CalibrationConfig,

    /// Report generator thresholds.
    pub report: ReportThresholds,

    /// Emit per-stage debug traces while scoring.
    #[serde(default)]
    pub debug: bool,
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate all sub-configurations.
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.calibration.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
