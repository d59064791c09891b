//! # Error Types
//!
//! Structured error types for bearing_core. The formula functions themselves
//! never fail; errors only arise at the lookup surfaces, where a method or a
//! factor is selected by name.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::errors::CalcError;
//! use bearing_core::methods::BearingMethod;
//!
//! let err = "Rankine".parse::<BearingMethod>().unwrap_err();
//! assert_eq!(err, CalcError::unknown_method("Rankine"));
//! assert_eq!(err.error_code(), "UNKNOWN_METHOD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bearing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for lookup operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No bearing capacity method is registered under this name
    #[error("Unknown bearing capacity method: '{name}' (expected one of Terzaghi, Meyerhof, Vesic, Hansen, EC7)")]
    UnknownMethod { name: String },

    /// No bearing capacity factor is known under this name
    #[error("Unknown bearing capacity factor: '{name}' (expected one of Nc, Nq, Ngamma)")]
    UnknownFactor { name: String },
}

impl CalcError {
    /// Create an UnknownMethod error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        CalcError::UnknownMethod { name: name.into() }
    }

    /// Create an UnknownFactor error
    pub fn unknown_factor(name: impl Into<String>) -> Self {
        CalcError::UnknownFactor { name: name.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownMethod { .. } => "UNKNOWN_METHOD",
            CalcError::UnknownFactor { .. } => "UNKNOWN_FACTOR",
        }
    }
}
