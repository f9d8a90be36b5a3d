//! fieldcheck - A strict, deterministic flat-record schema validator
//!
//! Validates a flat user record (id, name, email) against a fixed schema
//! and returns every violation found, never just the first one.

pub mod schema;

pub use schema::{validate_user_record, RecordValidator, ValidationOutcome};
