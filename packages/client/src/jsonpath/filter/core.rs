//! Core filter evaluation logic
//!
//! Handles the main evaluation entry points for filter expressions: boolean
//! predicate evaluation and value evaluation of operands.

use serde_json::Value;

use super::{
    TRACE_TARGET, comparisons::ValueComparator, property::PropertyResolver, utils::FilterUtils,
};
use crate::jsonpath::ast::{FilterExpression, FilterValue, LogicalOp, PropertyOrigin};

/// Filter Expression Evaluator
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Evaluate filter predicate against the node under test
    ///
    /// `root` is the document the evaluation started from, used by `$`
    /// references inside the predicate.
    #[must_use]
    pub fn evaluate_predicate(current: &Value, root: &Value, expr: &FilterExpression) -> bool {
        tracing::debug!(
            target: TRACE_TARGET,
            context = %FilterUtils::trace_json(current),
            expr = ?expr,
            "evaluate_predicate called"
        );
        match expr {
            FilterExpression::Property { origin, path } => {
                PropertyResolver::property_exists_and_truthy(Self::origin(*origin, current, root), path)
            }
            FilterExpression::Comparison {
                left,
                operator,
                right,
            } => {
                let left_val = Self::evaluate_expression(current, root, left);
                let right_val = Self::evaluate_expression(current, root, right);
                let result = ValueComparator::compare_values(&left_val, *operator, &right_val);
                tracing::trace!(
                    target: TRACE_TARGET,
                    left = ?left_val,
                    op = ?operator,
                    right = ?right_val,
                    result = result,
                    "Comparison evaluated"
                );
                result
            }
            FilterExpression::Logical {
                left,
                operator,
                right,
            } => match operator {
                LogicalOp::And => {
                    Self::evaluate_predicate(current, root, left)
                        && Self::evaluate_predicate(current, root, right)
                }
                LogicalOp::Or => {
                    Self::evaluate_predicate(current, root, left)
                        || Self::evaluate_predicate(current, root, right)
                }
            },
            FilterExpression::Not { operand } => !Self::evaluate_predicate(current, root, operand),
            FilterExpression::Regex { target, regex } => {
                match Self::evaluate_expression(current, root, target) {
                    FilterValue::String(text) => regex.is_match(&text),
                    other => {
                        tracing::trace!(
                            target: TRACE_TARGET,
                            value = ?other,
                            "Regex target is not a string"
                        );
                        false
                    }
                }
            }
            FilterExpression::Current | FilterExpression::Literal { .. } => {
                FilterUtils::is_truthy(&Self::evaluate_expression(current, root, expr))
            }
        }
    }

    /// Evaluate expression to get its value
    ///
    /// Boolean sub-expressions in operand position evaluate to a boolean, so
    /// `(@.a > 1) == true` is well defined.
    #[must_use]
    pub fn evaluate_expression(current: &Value, root: &Value, expr: &FilterExpression) -> FilterValue {
        match expr {
            FilterExpression::Current => PropertyResolver::json_value_to_filter_value(current),
            FilterExpression::Property { origin, path } => {
                PropertyResolver::resolve_value(Self::origin(*origin, current, root), path)
            }
            FilterExpression::Literal { value } => value.clone(),
            FilterExpression::Comparison { .. }
            | FilterExpression::Logical { .. }
            | FilterExpression::Not { .. }
            | FilterExpression::Regex { .. } => {
                FilterValue::Boolean(Self::evaluate_predicate(current, root, expr))
            }
        }
    }

    #[inline]
    fn origin<'v>(origin: PropertyOrigin, current: &'v Value, root: &'v Value) -> &'v Value {
        match origin {
            PropertyOrigin::Current => current,
            PropertyOrigin::Root => root,
        }
    }
}
