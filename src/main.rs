//! fieldcheck demo entry point
//!
//! Prints validation outcomes for two hardcoded sample records. This binary
//! is a demonstration only; the library call contract is the product.

use fieldcheck::RecordValidator;
use serde_json::{json, Map, Value};

fn sample(fields: &[(&str, Value)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn main() {
    let validator = RecordValidator::new();

    let valid_record = sample(&[
        ("id", json!(1)),
        ("name", json!("John Doe")),
        ("email", json!("john.doe@example.com")),
    ]);

    let invalid_record = sample(&[
        ("id", json!("not_an_int")),
        ("name", json!("Jane Doe")),
        ("email", json!("invalid-email")),
    ]);

    for (label, record) in [("Valid", &valid_record), ("Invalid", &invalid_record)] {
        let outcome = validator.validate(record);
        println!("{} record validation:", label);
        println!("Valid: {}", outcome.valid);
        println!("Errors: {:?}", outcome.errors);
        println!();
    }
}
