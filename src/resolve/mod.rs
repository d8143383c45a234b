//! Tolerant normalization of loosely-shaped API records.
//!
//! The upstream API is inconsistent about key naming (English/Hungarian,
//! camelCase/snake_case) and about how it ships image references. Everything
//! in here is pure: values in, values out, no I/O and no failure modes.

pub mod field;
pub mod image;

pub use field::{display_text, resolve_field, Field, Record};
pub use image::{ImageRef, ImageResolver, IMAGE_RECORD_KEYS};

use serde_json::Value;

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0`, and `""` are falsy; arrays and objects are always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1200)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
