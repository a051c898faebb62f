//! # Error Types
//!
//! Structured error types for bom_core. A failed calculation names the
//! offending roof family, component and configuration values, so a caller
//! can point the user at the exact field that has no catalog part.
//!
//! ## Example
//!
//! ```rust
//! use bom_core::errors::{CalcError, CalcResult};
//!
//! fn check_rows(rows: u32) -> CalcResult<()> {
//!     if rows > 500 {
//!         return Err(CalcError::invalid_input(
//!             "rows",
//!             rows.to_string(),
//!             "More than 500 rows is not a single installation",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rows(12).is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bom_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for BOM calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A configuration choice has no part in the catalog
    #[error("No {component} available for {roof_type} ({variant}): {reason}")]
    UnresolvableVariant {
        roof_type: String,
        component: String,
        variant: String,
        reason: String,
    },

    /// A part key is missing from the catalog in use
    #[error("Part not found in catalog: {part}")]
    PartNotFound { part: String },

    /// Two catalog entries share a key or product code
    #[error("Duplicate catalog entry: {part}")]
    DuplicatePart { part: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnresolvableVariant error
    pub fn unresolvable(
        roof_type: impl Into<String>,
        component: impl Into<String>,
        variant: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::UnresolvableVariant {
            roof_type: roof_type.into(),
            component: component.into(),
            variant: variant.into(),
            reason: reason.into(),
        }
    }

    /// Create a PartNotFound error
    pub fn part_not_found(part: impl Into<String>) -> Self {
        CalcError::PartNotFound { part: part.into() }
    }

    /// Create a DuplicatePart error
    pub fn duplicate_part(part: impl Into<String>) -> Self {
        CalcError::DuplicatePart { part: part.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnresolvableVariant { .. } => "UNRESOLVABLE_VARIANT",
            CalcError::PartNotFound { .. } => "PART_NOT_FOUND",
            CalcError::DuplicatePart { .. } => "DUPLICATE_PART",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
