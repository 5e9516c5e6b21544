//! # Error Types
//!
//! Structured error types for earthing_core. These errors are designed to be
//! informative for both humans and machine consumers, providing enough context
//! to understand why a request was rejected.
//!
//! Only two errors originate inside the evaluator itself:
//! [`CalcError::UnknownMaterial`] and [`CalcError::InvalidElectrodeType`].
//! The remaining variants are produced by caller-side request validation.
//!
//! ## Example
//!
//! ```rust
//! use earthing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_resistivity(rho: f64) -> CalcResult<()> {
//!     if rho <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "earth_resistivity",
//!             rho.to_string(),
//!             "Resistivity must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for earthing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for evaluation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Strip material code is not in the material constant table
    #[error("Unknown strip material '{code}' (expected one of CU, AL, GI)")]
    UnknownMaterial { code: String },

    /// Electrode discriminator is neither pipe nor plate
    #[error("Invalid earthing type '{value}' (expected 'pipe' or 'plate')")]
    InvalidElectrodeType { value: String },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownMaterial error
    pub fn unknown_material(code: impl Into<String>) -> Self {
        CalcError::UnknownMaterial { code: code.into() }
    }

    /// Create an InvalidElectrodeType error
    pub fn invalid_electrode_type(value: impl Into<String>) -> Self {
        CalcError::InvalidElectrodeType {
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            CalcError::InvalidElectrodeType { .. } => "INVALID_ELECTRODE_TYPE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fault_current", "-5", "Fault current must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_tagged_json_shape() {
        let json = serde_json::to_value(CalcError::unknown_material("FE")).unwrap();
        assert_eq!(json["type"], "UnknownMaterial");
        assert_eq!(json["details"]["code"], "FE");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("rod_radius_m").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_material("FE").error_code(), "UNKNOWN_MATERIAL");
        assert_eq!(CalcError::invalid_electrode_type("rod").error_code(), "INVALID_ELECTRODE_TYPE");
    }

    #[test]
    fn test_display_messages() {
        let msg = CalcError::invalid_electrode_type("rod").to_string();
        assert!(msg.contains("'rod'"));
        assert!(msg.contains("pipe"));
    }
}
