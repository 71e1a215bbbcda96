//! Calibration classifier settings.

use serde::{Deserialize, Serialize};

/// Settings for tier calibration and score snapping.
///
/// Tolerances express the asymmetric snapping rule: an aggregated score
/// already within `tolerance` points of a matched tier's target is left
/// unchanged, anything further away snaps to the target. Upper tiers get
/// tighter tolerances than the bottom tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Snap tolerance for the blueprint-grade rules.
    pub blueprint_tolerance: f32,
    /// Snap tolerance for the advanced-critique rules.
    pub advanced_tolerance: f32,
    /// Snap tolerance for the surface-polish rules.
    pub surface_tolerance: f32,
    /// Snap tolerance for fluent-shallow and random-noise.
    pub shallow_tolerance: f32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            blueprint_tolerance: 3.0,
            advanced_tolerance: 3.0,
            surface_tolerance: 4.0,
            shallow_tolerance: 5.0,
        }
    }
}

impl CalibrationConfig {
    /// Validate the tolerances: finite, within `[0, 10]`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("blueprint_tolerance", self.blueprint_tolerance),
            ("advanced_tolerance", self.advanced_tolerance),
            ("surface_tolerance", self.surface_tolerance),
            ("shallow_tolerance", self.shallow_tolerance),
        ] {
            if !value.is_finite() || !(0.0..=10.0).contains(&value) {
                return Err(format!("{} must be in [0, 10], got {}", name, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        assert!(CalibrationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_tolerances() {
        let config = CalibrationConfig::default();
        assert_eq!(config.blueprint_tolerance, 3.0);
        assert_eq!(config.advanced_tolerance, 3.0);
        assert_eq!(config.surface_tolerance, 4.0);
        assert_eq!(config.shallow_tolerance, 5.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = CalibrationConfig {
            surface_tolerance: 25.0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("surface_tolerance"));
    }
}
