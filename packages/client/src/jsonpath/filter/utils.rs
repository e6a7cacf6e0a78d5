//! Utility functions for filter evaluation
//!
//! Truthiness rules and diagnostics helpers shared by the filter modules.

use serde_json::Value;

use crate::jsonpath::ast::FilterValue;

/// Utility functions for filter operations
pub struct FilterUtils;

impl FilterUtils {
    /// Check if filter value is truthy
    ///
    /// Missing and null are falsy, as are `false`, zero, the empty string
    /// and empty containers.
    #[inline]
    #[must_use]
    pub fn is_truthy(value: &FilterValue) -> bool {
        match value {
            FilterValue::Boolean(b) => *b,
            FilterValue::Integer(i) => *i != 0,
            FilterValue::Number(f) => *f != 0.0 && !f.is_nan(),
            FilterValue::String(s) => !s.is_empty(),
            FilterValue::Json(json) => match json {
                Value::Array(arr) => !arr.is_empty(),
                Value::Object(obj) => !obj.is_empty(),
                _ => true,
            },
            FilterValue::Null | FilterValue::Missing => false,
        }
    }

    /// Compact JSON text for trace output
    #[inline]
    pub(crate) fn trace_json(value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "invalid".to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(FilterUtils::is_truthy(&FilterValue::Integer(3)));
        assert!(!FilterUtils::is_truthy(&FilterValue::Integer(0)));
        assert!(!FilterUtils::is_truthy(&FilterValue::String(String::new())));
        assert!(!FilterUtils::is_truthy(&FilterValue::Missing));
        assert!(!FilterUtils::is_truthy(&FilterValue::Null));
        assert!(!FilterUtils::is_truthy(&FilterValue::Json(json!([]))));
        assert!(FilterUtils::is_truthy(&FilterValue::Json(json!({"a": 1}))));
    }
}
