//! Fingerprint engine error types.
//!
//! The scoring pipeline itself is a total function over strings and never
//! fails; these errors cover the surfaces around it — configuration
//! validation, out-of-range values detected by invariant checks, and
//! serialization of result types.

use thiserror::Error;

/// Errors that can occur around cognitive fingerprint scoring.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid aggregation weight value
    #[error("Invalid weight '{name}': {value}. {reason}")]
    InvalidWeights {
        /// Weight name
        name: String,
        /// Offending value
        value: f32,
        /// Reason for invalidity
        reason: String,
    },

    /// A marker produced a score outside [0, 100]
    #[error("Marker '{marker}' produced out-of-range score {value}")]
    InvalidScore {
        /// Marker name
        marker: String,
        /// Offending score
        value: f32,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for fingerprint operations.
pub type FingerprintResult<T> = Result<T, FingerprintError>;

impl From<serde_json::Error> for FingerprintError {
    fn from(err: serde_json::Error) -> Self {
        FingerprintError::SerializationError(err.to_string())
    }
}

impl FingerprintError {
    /// Create an InvalidWeights error.
    pub fn invalid_weight(name: impl Into<String>, value: f32, reason: impl Into<String>) -> Self {
        FingerprintError::InvalidWeights {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an InvalidScore error.
    pub fn invalid_score(marker: impl Into<String>, value: f32) -> Self {
        FingerprintError::InvalidScore {
            marker: marker.into(),
            value,
        }
    }

    /// Check if this error is recoverable (can be retried with different
    /// parameters).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FingerprintError::ConfigError(_) | FingerprintError::InvalidWeights { .. }
        )
    }
}
