//! Property access and resolution for filter expressions
//!
//! Handles property path traversal and value conversion with missing vs null
//! semantics: a step that finds nothing yields `FilterValue::Missing`, a
//! present `null` yields `FilterValue::Null`.

use serde_json::Value;

use super::{TRACE_TARGET, utils::FilterUtils};
use crate::jsonpath::{
    ast::{FilterValue, PropertyStep},
    core_evaluator::array_ops::resolve_index,
};

/// Property resolution utilities
pub struct PropertyResolver;

impl PropertyResolver {
    /// Follow a property path from `start`, `None` when any step finds nothing
    #[must_use]
    pub fn resolve<'v>(start: &'v Value, path: &[PropertyStep]) -> Option<&'v Value> {
        let mut current = start;

        for step in path {
            let next = match (step, current) {
                (PropertyStep::Name(name), Value::Object(obj)) => obj.get(name),
                (PropertyStep::Index(index), Value::Array(arr)) => {
                    resolve_index(arr.len(), *index).and_then(|i| arr.get(i))
                }
                _ => None,
            };

            match next {
                Some(value) => {
                    tracing::trace!(
                        target: TRACE_TARGET,
                        step = ?step,
                        value = %FilterUtils::trace_json(value),
                        "Found property"
                    );
                    current = value;
                }
                None => {
                    tracing::trace!(
                        target: TRACE_TARGET,
                        step = ?step,
                        "Property does not exist"
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    /// Resolve a property path into a comparable filter value
    #[inline]
    #[must_use]
    pub fn resolve_value(start: &Value, path: &[PropertyStep]) -> FilterValue {
        Self::resolve(start, path).map_or(FilterValue::Missing, Self::json_value_to_filter_value)
    }

    /// Check if property path exists and is truthy in filter context
    ///
    /// This is the semantics of a bare `[?(@.property)]` filter.
    #[inline]
    #[must_use]
    pub fn property_exists_and_truthy(start: &Value, path: &[PropertyStep]) -> bool {
        let result = FilterUtils::is_truthy(&Self::resolve_value(start, path));
        tracing::debug!(
            target: TRACE_TARGET,
            path = ?path,
            result = result,
            "Evaluated property truthiness"
        );
        result
    }

    /// Convert JSON value to `FilterValue` for comparison
    #[must_use]
    pub fn json_value_to_filter_value(value: &Value) -> FilterValue {
        match value {
            Value::Null => FilterValue::Null,
            Value::Bool(b) => FilterValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FilterValue::Integer(i),
                None => FilterValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FilterValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => FilterValue::Json(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolve_nested_path() {
        let doc = json!({"a": {"b": [10, 20, 30]}});
        let path = vec![
            PropertyStep::Name("a".into()),
            PropertyStep::Name("b".into()),
            PropertyStep::Index(-1),
        ];
        assert_eq!(PropertyResolver::resolve_value(&doc, &path), FilterValue::Integer(30));
    }

    #[test]
    fn test_missing_differs_from_null() {
        let doc = json!({"a": null});
        assert_eq!(
            PropertyResolver::resolve_value(&doc, &[PropertyStep::Name("a".into())]),
            FilterValue::Null
        );
        assert_eq!(
            PropertyResolver::resolve_value(&doc, &[PropertyStep::Name("b".into())]),
            FilterValue::Missing
        );
    }

    #[test]
    fn test_name_step_on_array_is_missing() {
        let doc = json!([1, 2]);
        assert_eq!(
            PropertyResolver::resolve_value(&doc, &[PropertyStep::Name("0".into())]),
            FilterValue::Missing
        );
    }
}
