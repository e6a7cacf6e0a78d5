//! Comparison operations for filter expressions
//!
//! Numbers compare numerically across integer and decimal forms, strings
//! lexicographically, booleans and null by equality only. Values of different
//! kinds are never equal and never ordered; a missing operand makes every
//! comparison false.

use std::cmp::Ordering;

use super::TRACE_TARGET;
use crate::jsonpath::ast::{ComparisonOp, FilterValue};

/// Value comparison utilities
pub struct ValueComparator;

impl ValueComparator {
    /// Compare two filter values using the specified operator
    #[must_use]
    pub fn compare_values(left: &FilterValue, op: ComparisonOp, right: &FilterValue) -> bool {
        if matches!(left, FilterValue::Missing) || matches!(right, FilterValue::Missing) {
            tracing::debug!(
                target: TRACE_TARGET,
                op = ?op,
                "Missing operand, comparison is false"
            );
            return false;
        }

        match Self::ordering(left, right) {
            Some(ordering) => Self::apply_ordering(op, ordering),
            None => {
                let equal = Self::equal_unordered(left, right);
                match op {
                    ComparisonOp::Equal => equal,
                    ComparisonOp::NotEqual => !equal,
                    _ => false,
                }
            }
        }
    }

    /// Total order for numbers and strings, `None` for everything else
    fn ordering(left: &FilterValue, right: &FilterValue) -> Option<Ordering> {
        match (left, right) {
            (FilterValue::Integer(a), FilterValue::Integer(b)) => Some(a.cmp(b)),
            (FilterValue::String(a), FilterValue::String(b)) => Some(a.cmp(b)),
            _ => {
                let a = Self::as_f64(left)?;
                let b = Self::as_f64(right)?;
                a.partial_cmp(&b)
            }
        }
    }

    fn as_f64(value: &FilterValue) -> Option<f64> {
        match value {
            #[allow(clippy::cast_precision_loss)]
            FilterValue::Integer(i) => Some(*i as f64),
            FilterValue::Number(f) => Some(*f),
            _ => None,
        }
    }

    fn apply_ordering(op: ComparisonOp, ordering: Ordering) -> bool {
        match op {
            ComparisonOp::Equal => ordering == Ordering::Equal,
            ComparisonOp::NotEqual => ordering != Ordering::Equal,
            ComparisonOp::Less => ordering == Ordering::Less,
            ComparisonOp::LessEq => ordering != Ordering::Greater,
            ComparisonOp::Greater => ordering == Ordering::Greater,
            ComparisonOp::GreaterEq => ordering != Ordering::Less,
        }
    }

    fn equal_unordered(left: &FilterValue, right: &FilterValue) -> bool {
        match (left, right) {
            (FilterValue::Boolean(a), FilterValue::Boolean(b)) => a == b,
            (FilterValue::Null, FilterValue::Null) => true,
            (FilterValue::Json(a), FilterValue::Json(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_numeric_comparison() {
        assert!(ValueComparator::compare_values(
            &FilterValue::Integer(2),
            ComparisonOp::Equal,
            &FilterValue::Number(2.0)
        ));
        assert!(ValueComparator::compare_values(
            &FilterValue::Number(1.5),
            ComparisonOp::Less,
            &FilterValue::Integer(2)
        ));
    }

    #[test]
    fn test_mixed_kinds_never_equal_or_ordered() {
        let one = FilterValue::Integer(1);
        let text = FilterValue::String("1".into());
        assert!(!ValueComparator::compare_values(&one, ComparisonOp::Equal, &text));
        assert!(ValueComparator::compare_values(&one, ComparisonOp::NotEqual, &text));
        assert!(!ValueComparator::compare_values(&one, ComparisonOp::Less, &text));
        assert!(!ValueComparator::compare_values(&one, ComparisonOp::GreaterEq, &text));
    }

    #[test]
    fn test_missing_never_compares_true() {
        for op in [ComparisonOp::Equal, ComparisonOp::NotEqual, ComparisonOp::LessEq] {
            assert!(!ValueComparator::compare_values(
                &FilterValue::Missing,
                op,
                &FilterValue::Null
            ));
        }
    }

    #[test]
    fn test_booleans_only_support_equality() {
        let t = FilterValue::Boolean(true);
        let f = FilterValue::Boolean(false);
        assert!(ValueComparator::compare_values(&t, ComparisonOp::NotEqual, &f));
        assert!(!ValueComparator::compare_values(&t, ComparisonOp::Greater, &f));
    }
}
