//! Schema type definitions
//!
//! Supported field types:
//! - int: 64-bit signed integer
//! - str: UTF-8 string
//!
//! The schema is an ordered sequence of field specs. Definition order is
//! observable: missing-field violations are reported in this order.

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    String,
}

impl FieldType {
    /// Returns the canonical type name used in violation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::String => "str",
        }
    }
}

/// Optional per-field format constraint, checked on top of the type check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    /// Value must match the email pattern
    Email,
}

/// Per-field rule: expected type, required flag, optional format tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in records
    pub name: String,
    /// Expected field type
    pub field_type: FieldType,
    /// Whether the field must be present and non-null
    pub required: bool,
    /// Optional format constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

impl FieldSpec {
    /// Create a required int field
    pub fn required_int(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Int,
            required: true,
            format: None,
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            required: true,
            format: None,
        }
    }

    /// Attach a format constraint to this field
    pub fn with_format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Ordered field specifications a record is checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema from field specs; order is preserved
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The fixed user-record schema: id (int), name (str), email (str, email format)
    pub fn user() -> Self {
        Self::new(vec![
            FieldSpec::required_int("id"),
            FieldSpec::required_string("name"),
            FieldSpec::required_string("email").with_format(FieldFormat::Email),
        ])
    }

    /// Field specs in definition order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_schema_field_order() {
        let schema = Schema::user();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_user_schema_all_required() {
        let schema = Schema::user();
        assert!(schema.fields().iter().all(|f| f.required));
    }

    #[test]
    fn test_email_field_carries_format() {
        let schema = Schema::user();
        let email = schema.field("email").unwrap();
        assert_eq!(email.field_type, FieldType::String);
        assert_eq!(email.format, Some(FieldFormat::Email));
    }

    #[test]
    fn test_unknown_field_lookup() {
        let schema = Schema::user();
        assert!(schema.field("age").is_none());
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::String.type_name(), "str");
    }
}
