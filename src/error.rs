//! Error types for orbitar.
//!
//! All fallible operations return `Result<T, OrbitError>` instead of
//! panicking. Degenerate physics inputs (a satellite sitting exactly on the
//! central body, an empty telemetry window) are absorbed by local guards in
//! the components themselves and never surface here; the variants below
//! cover configuration, I/O, and defensive state checks.

use thiserror::Error;

/// Result type alias for orbitar operations.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// Unified error type for all orbitar operations.
#[derive(Debug, Error)]
pub enum OrbitError {
    /// Numerical instability detected (NaN or Inf) in satellite state.
    #[error("non-finite value detected at {location}")]
    NonFiniteValue {
        /// Location where the non-finite value was detected.
        location: String,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command addressed to a satellite index that does not exist.
    #[error("no satellite at index {index} (mission has {count})")]
    InvalidSatellite {
        /// Requested satellite index.
        index: usize,
        /// Number of satellites in the mission.
        count: usize,
    },
}

impl OrbitError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error indicates corrupted simulation state
    /// (as opposed to bad input or I/O).
    #[must_use]
    pub const fn is_state_violation(&self) -> bool {
        matches!(self, Self::NonFiniteValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_violation_detection() {
        let non_finite = OrbitError::NonFiniteValue {
            location: "satellite 0 velocity".to_string(),
        };
        assert!(non_finite.is_state_violation());

        let config = OrbitError::config("invalid");
        assert!(!config.is_state_violation());
    }

    #[test]
    fn test_error_config() {
        let err = OrbitError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_non_finite_display() {
        let err = OrbitError::NonFiniteValue {
            location: "satellite 2 position".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("non-finite value"));
        assert!(msg.contains("satellite 2 position"));
    }

    #[test]
    fn test_error_invalid_satellite_display() {
        let err = OrbitError::InvalidSatellite { index: 5, count: 2 };
        let msg = err.to_string();
        assert!(msg.contains("index 5"));
        assert!(msg.contains("has 2"));
    }

    #[test]
    fn test_error_io() {
        let err = OrbitError::Io(std::io::Error::other("file not found"));
        assert!(!err.is_state_violation());
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = OrbitError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
