//! Record validation subsystem for fieldcheck
//!
//! # Design Principles
//!
//! - The schema is fixed at construction and never mutated
//! - Validation is exhaustive: every violation is collected, no short-circuit
//! - Validation is deterministic: violation order is stable across calls
//! - Exact type identity, no coercion (a bool is never an int)
//! - Unknown fields are ignored, never reported

mod types;
mod validator;
mod violation;

pub use types::{FieldFormat, FieldSpec, FieldType, Schema};
pub use validator::{validate_user_record, RecordValidator};
pub use violation::{ValidationOutcome, Violation};
