//! Record validator for the fixed user schema
//!
//! Validation semantics:
//! - All violations are collected in one call, no short-circuit
//! - Required-field violations come first, in schema definition order
//! - Type and format violations follow, in record iteration order
//! - Fields not in the schema are skipped silently
//! - Types must match exactly, no coercion
//!
//! The validator does not mutate records. Validation is deterministic.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use super::types::{FieldFormat, FieldType, Schema};
use super::violation::{ValidationOutcome, Violation};

lazy_static! {
    /// Compiled once, shared by every validator instance.
    ///
    /// Two alternatives: a multi-character local part must start and end with
    /// an alphanumeric, or the local part is a single alphanumeric. The domain
    /// must start and end with an alphanumeric and carry a 2+ letter TLD.
    /// The exact acceptance boundaries are part of the observable contract;
    /// do not simplify the alternation.
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9][a-zA-Z0-9._%+-]*[a-zA-Z0-9]@[a-zA-Z0-9][a-zA-Z0-9.-]*[a-zA-Z0-9]\.[a-zA-Z]{2,}$|^[a-zA-Z0-9]@[a-zA-Z0-9][a-zA-Z0-9.-]*[a-zA-Z0-9]\.[a-zA-Z]{2,}$"
    )
    .expect("email pattern must compile");
}

/// Validates flat records against the fixed user schema.
///
/// Holds an immutable schema and a reference to the shared email matcher.
/// Safe to share across threads; validation has no side effects.
pub struct RecordValidator {
    schema: Schema,
    email_pattern: &'static Regex,
}

impl RecordValidator {
    /// Creates a validator for the fixed user schema.
    pub fn new() -> Self {
        Self {
            schema: Schema::user(),
            email_pattern: &EMAIL_PATTERN,
        }
    }

    /// Validates a record against the schema.
    ///
    /// Accepts any flat mapping and always produces an outcome; malformed
    /// field values become violations, never panics or errors.
    ///
    /// Violation order is stable: missing/null required fields in schema
    /// definition order, then per-field type and format violations in record
    /// iteration order.
    pub fn validate(&self, record: &Map<String, Value>) -> ValidationOutcome {
        let mut violations = Vec::new();

        // Pass 1: required-field presence, in schema definition order
        for spec in self.schema.fields() {
            if !spec.required {
                continue;
            }
            match record.get(&spec.name) {
                None => violations.push(Violation::MissingRequiredField {
                    field: spec.name.clone(),
                }),
                Some(Value::Null) => violations.push(Violation::NullRequiredField {
                    field: spec.name.clone(),
                }),
                Some(_) => {}
            }
        }

        // Pass 2: type and format checks, in record iteration order
        for (name, value) in record {
            let spec = match self.schema.field(name) {
                Some(spec) => spec,
                // Extra fields are always allowed, silently
                None => continue,
            };

            // Optional nulls never produce type or format violations.
            // Unreachable under the fixed schema, where every field is
            // required.
            if value.is_null() && !spec.required {
                continue;
            }

            if !type_matches(value, spec.field_type) {
                violations.push(Violation::TypeMismatch {
                    field: name.clone(),
                    expected: spec.field_type.type_name(),
                    actual: value_type_name(value),
                });
            }

            // Format check is independent of the type check above, but only
            // applies to values that are strings at all.
            if spec.format == Some(FieldFormat::Email) {
                if let Value::String(s) = value {
                    if !self.email_pattern.is_match(s) {
                        violations.push(Violation::InvalidEmailFormat {
                            field: name.clone(),
                        });
                    }
                }
            }
        }

        ValidationOutcome::from_violations(violations)
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a user record with a freshly constructed validator.
///
/// Equivalent to `RecordValidator::new().validate(record)`.
pub fn validate_user_record(record: &Map<String, Value>) -> ValidationOutcome {
    RecordValidator::new().validate(record)
}

/// Exact type identity: booleans are never integers.
fn type_matches(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::Int => value.is_i64() || value.is_u64(),
        FieldType::String => value.is_string(),
    }
}

/// Returns the runtime type name used in violation messages.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
