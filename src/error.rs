// src/error.rs
use std::fmt;

/// Error types for the sde-solver library
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// A caller-supplied function (or increment batch) returned data that cannot
    /// be aligned with the path dimension
    ShapeMismatch {
        function: String,
        expected: String,
        received: String,
    },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::ShapeMismatch {
                function,
                expected,
                received,
            } => {
                write!(
                    f,
                    "Shape mismatch in '{}': expected {}, received {}",
                    function, expected, received
                )
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for sde-solver operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SdeResult<()> {
        if paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
