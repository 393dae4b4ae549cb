//! Error types for the CAM tools crate.
//!
//! Geometry generation never fails; inputs are clamped to safe minimums. These
//! errors are produced by the strict `validate()` checks that callers may run
//! when they prefer rejecting settings over silently clamping them.

use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    pub(crate) fn out_of_range(name: &str, value: f64, min: f64, max: f64) -> Self {
        ParameterError::OutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        }
    }
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Require `value` to be finite and within `min..=max`.
pub(crate) fn check_range(name: &str, value: f64, min: f64, max: f64) -> ParameterResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ParameterError::out_of_range(name, value, min, max))
    }
}
