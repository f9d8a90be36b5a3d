//! Validation violation taxonomy and outcome type
//!
//! Violations are findings, not failures: `validate` collects every one and
//! returns them together. The caller decides how to present them.

use serde::Serialize;
use thiserror::Error;

/// A single schema violation found in a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required field is absent from the record
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A required field is present but null
    #[error("Required field '{field}' cannot be None")]
    NullRequiredField { field: String },

    /// A field's value has the wrong runtime type
    #[error("Field '{field}' must be of type {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A string field does not match the email pattern
    #[error("Field '{field}' must be a valid email address")]
    InvalidEmailFormat { field: String },
}

/// Result of a validation call: `valid` is true iff `errors` is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Whether the record conforms to the schema
    pub valid: bool,
    /// Human-readable violation messages, in a stable order
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Builds an outcome from collected violations
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            errors: violations.iter().map(|v| v.to_string()).collect(),
        }
    }
}
