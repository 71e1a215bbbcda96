//! Configuration round-trip and validation tests.

use super::*;

#[test]
fn test_default_config_valid() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn test_config_json_roundtrip() {
    let config = EngineConfig {
        debug: true,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_debug_defaults_to_false_when_missing() {
    let json = r#"{
        "weights": {
            "semantic_compression": 0.30,
            "inferential_continuity": 0.25,
            "semantic_topology": 0.10,
            "cognitive_asymmetry": 0.00,
            "epistemic_resistance": 0.20,
            "metacognitive_awareness": 0.15
        },
        "calibration": {
            "blueprint_tolerance": 3.0,
            "advanced_tolerance": 3.0,
            "surface_tolerance": 4.0,
            "shallow_tolerance": 5.0
        },
        "report": {
            "compression": 80.0,
            "continuity": 80.0,
            "resistance": 75.0,
            "metacognition": 70.0,
            "topology": 60.0
        }
    }"#;
    let config: EngineConfig = serde_json::from_str(json).unwrap();
    assert!(!config.debug);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_weights_fail_validation() {
    let config = EngineConfig {
        weights: AggregationWeights {
            cognitive_asymmetry: 0.5,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_calibration_fails_validation() {
    let config = EngineConfig {
        calibration: CalibrationConfig {
            blueprint_tolerance: -1.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
