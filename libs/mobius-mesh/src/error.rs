//! # Error Types
//!
//! Error types for strip construction, export and rendering. All errors are
//! explicit and carry enough context for debugging.
//!
//! ## Error Policy
//!
//! - Parameters are validated once, at construction, before any mesh work
//! - NO fallback values when validation fails
//! - Downstream geometry never fails on validated input

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or presenting a strip.
///
/// ## Example
///
/// ```rust
/// use mobius_mesh::{MobiusError, MobiusStrip};
///
/// match MobiusStrip::new(1.0, 0.4, 1) {
///     Ok(strip) => println!("area {}", strip.surface_area()),
///     Err(MobiusError::InvalidParameter { name, .. }) => eprintln!("bad {name}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MobiusError {
    /// A shape parameter is outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (`R`, `w` or `n`)
        name: &'static str,
        /// Offending value, rendered as text
        value: String,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// The renderer could not produce a plot.
    #[error("Render error: {0}")]
    Render(String),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mesh buffers could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MobiusError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

impl From<ConfigError> for MobiusError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidCenterRadius(value) => {
                Self::invalid_parameter("R", value, "center radius must be positive and finite")
            }
            ConfigError::InvalidStripWidth(value) => {
                Self::invalid_parameter("w", value, "strip width must be positive and finite")
            }
            ConfigError::InvalidResolution(value) => {
                Self::invalid_parameter("n", value, "resolution must be at least 2")
            }
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for strip operations.
pub type MobiusResult<T> = Result<T, MobiusError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = MobiusError::invalid_parameter("n", 1, "must be at least 2");
        let text = err.to_string();
        assert!(text.contains("'n'"));
        assert!(text.contains("at least 2"));

        let render = MobiusError::Render("empty mesh".to_string());
        assert!(render.to_string().contains("empty mesh"));
    }

    #[test]
    fn test_config_error_becomes_invalid_parameter() {
        let err: MobiusError = ConfigError::InvalidResolution(0).into();
        assert!(matches!(err, MobiusError::InvalidParameter { name: "n", .. }));

        let err: MobiusError = ConfigError::InvalidStripWidth(-1.0).into();
        assert!(err.to_string().contains("-1"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MobiusError>();
    }
}
