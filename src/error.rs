// src/error.rs
use std::fmt;

/// Custom error types for the bs-heatmap library
#[derive(Debug, Clone, PartialEq)]
pub enum HeatmapError {
    /// A parameter is outside the mathematical domain of the formulas
    /// (zero volatility, zero expiry, non-positive spot/strike, ...)
    Domain {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A selector string did not match any known variant
    /// (unrecognized Greek name or P/L mode)
    InvalidArgument {
        argument: String,
        value: String,
        expected: String,
    },

    /// A computation produced a non-finite or structurally invalid result
    Numerical { operation: String, reason: String },
}

impl fmt::Display for HeatmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatmapError::Domain {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Parameter '{}' = {} outside domain: {}",
                    parameter, value, constraint
                )
            }
            HeatmapError::InvalidArgument {
                argument,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid {} '{}': expected one of {}",
                    argument, value, expected
                )
            }
            HeatmapError::Numerical { operation, reason } => {
                write!(f, "Numerical error in {}: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for HeatmapError {}

/// Result type alias for bs-heatmap operations
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Validation utilities applied at the engine boundary, before any
/// formula evaluation
pub mod validation {
    use super::{HeatmapError, HeatmapResult};

    /// Validate that a parameter is strictly positive
    pub fn validate_positive(name: &str, value: f64) -> HeatmapResult<()> {
        if value <= 0.0 {
            Err(HeatmapError::Domain {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> HeatmapResult<()> {
        if !value.is_finite() {
            Err(HeatmapError::Domain {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an integer parameter lies in an inclusive range
    pub fn validate_range_u32(name: &str, value: u32, min: u32, max: u32) -> HeatmapResult<()> {
        if value < min || value > max {
            Err(HeatmapError::Domain {
                parameter: name.to_string(),
                value: value as f64,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a days-to-expiry count
    pub fn validate_days(days: u32) -> HeatmapResult<()> {
        if days == 0 {
            Err(HeatmapError::Domain {
                parameter: "days_to_expiry".to_string(),
                value: 0.0,
                constraint: "must be at least 1 (t = 0 makes d1 undefined)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("volatility", 0.5).is_ok());
        assert!(validate_positive("volatility", 0.0).is_err());
        assert!(validate_positive("spot", -100.0).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("rate", 0.05).is_ok());
        assert!(validate_finite("rate", f64::NAN).is_err());
        assert!(validate_finite("rate", f64::INFINITY).is_err());
        assert!(validate_finite("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_range_u32() {
        assert!(validate_range_u32("range_pct", 1, 1, 455).is_ok());
        assert!(validate_range_u32("range_pct", 455, 1, 455).is_ok());
        assert!(validate_range_u32("range_pct", 0, 1, 455).is_err());
        assert!(validate_range_u32("range_pct", 456, 1, 455).is_err());
    }

    #[test]
    fn test_validate_days() {
        assert!(validate_days(1).is_ok());
        assert!(validate_days(0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = HeatmapError::Domain {
            parameter: "volatility".to_string(),
            value: 0.0,
            constraint: "must be positive".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("volatility"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = HeatmapError::InvalidArgument {
            argument: "greek".to_string(),
            value: "Charm".to_string(),
            expected: "Delta, Gamma, Vega, Theta, Rho".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Charm"));
        assert!(display.contains("Delta"));
    }
}
