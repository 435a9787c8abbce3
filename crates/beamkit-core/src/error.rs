//! Error handling for Beamkit.
//!
//! Planning is pure and deterministic: a failed computation cannot succeed
//! on retry, so every error here is terminal for the document it concerns.
//! All error types use `thiserror`.

use thiserror::Error;

/// Errors raised while planning a toolpath.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The declared drawing unit is outside the recognized set.
    #[error("Unsupported drawing unit: {unit}")]
    UnsupportedUnit {
        /// The declared unit as reported by the document.
        unit: String,
    },

    /// Input geometry contains a coordinate that is not a finite number.
    #[error("Malformed geometry: {detail}")]
    MalformedGeometry {
        /// Description of the offending segment.
        detail: String,
    },

    /// A job parameter failed validation.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to job parameter validation.
#[derive(Error, Debug)]
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
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
