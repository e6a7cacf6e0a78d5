//! Core `JSONPath` evaluator struct and the token walk
//!
//! Tokens are applied left to right. Until the first array filter the walk
//! follows a single node and a shape mismatch is an error; afterwards every
//! token is applied to each node of the list and mismatches are skipped.

use serde_json::Value;

use super::{
    filters::ContextFilters,
    selectors::{apply_to_node, apply_to_nodes},
};
use crate::jsonpath::{
    ast::{FilterExpression, PathToken, PredicateToken},
    compiler::JsonPathParser,
    error::{JsonPathResult, not_a_container_error},
    expression::JsonPathExpression,
    filter::Predicate,
};

/// Matched nodes plus the shape signal for the outputs
///
/// Outside array mode there is at most one node; an empty result means the
/// path matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    nodes: Vec<Value>,
    array_mode: bool,
}

impl EvaluationResult {
    /// Create a result from already matched nodes
    #[inline]
    #[must_use]
    pub fn new(nodes: Vec<Value>, array_mode: bool) -> Self {
        Self { nodes, array_mode }
    }

    /// Matched nodes in document order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Value] {
        &self.nodes
    }

    /// Whether any array filter was applied during the walk
    #[inline]
    #[must_use]
    pub fn array_mode(&self) -> bool {
        self.array_mode
    }

    /// First matched node
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.nodes.first()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Take the matched nodes
    #[inline]
    #[must_use]
    pub fn into_nodes(self) -> Vec<Value> {
        self.nodes
    }
}

/// Position of the walk between two tokens
#[derive(Debug)]
pub(super) enum Cursor<'v> {
    /// Exactly one node, before any fan-out
    Node(&'v Value),
    /// A child or index lookup found nothing
    Missing,
    /// Node list after a fan-out
    Nodes(Vec<&'v Value>),
}

/// Core `JSONPath` evaluator owning a compiled expression
///
/// Holds no per-call state, so one evaluator can serve many documents and
/// threads.
#[derive(Debug, Clone)]
pub struct CoreJsonPathEvaluator {
    path: JsonPathExpression,
}

impl CoreJsonPathEvaluator {
    /// Create new evaluator with `JSONPath` expression
    ///
    /// # Errors
    /// Returns `JsonPathError` if the expression is blank or does not compile.
    pub fn new(expression: &str) -> JsonPathResult<Self> {
        Ok(Self::from_compiled(JsonPathParser::compile(expression)?))
    }

    /// Wrap an already compiled expression
    #[inline]
    #[must_use]
    pub fn from_compiled(path: JsonPathExpression) -> Self {
        Self { path }
    }

    /// The compiled expression
    #[inline]
    #[must_use]
    pub fn path(&self) -> &JsonPathExpression {
        &self.path
    }

    /// Get the original expression string
    #[inline]
    #[must_use]
    pub fn expression(&self) -> &str {
        self.path.original()
    }

    /// Evaluate against a parsed document
    ///
    /// # Errors
    /// See [`evaluate`].
    #[inline]
    pub fn evaluate(&self, root: &Value) -> JsonPathResult<EvaluationResult> {
        evaluate(&self.path, root)
    }

    /// Evaluate with caller predicates for `[?]` placeholders
    ///
    /// # Errors
    /// See [`evaluate_with_filters`].
    #[inline]
    pub fn evaluate_with_filters(
        &self,
        root: &Value,
        filters: &mut ContextFilters,
    ) -> JsonPathResult<EvaluationResult> {
        evaluate_with_filters(&self.path, root, filters)
    }
}

/// Apply a compiled path to a parsed document
///
/// # Errors
/// - `NotAContainer` when the root is a scalar
/// - `PathApplicationError` when a token cannot be applied to the node it
///   reaches before any fan-out, or a `[?]` placeholder has no predicate
pub fn evaluate(path: &JsonPathExpression, root: &Value) -> JsonPathResult<EvaluationResult> {
    evaluate_with_filters(path, root, &mut ContextFilters::new())
}

/// Apply a compiled path, binding `[?]` placeholders from `filters`
///
/// `filters` is consumed in placeholder order and afterwards lists every
/// predicate that was applied.
///
/// # Errors
/// Same as [`evaluate`].
pub fn evaluate_with_filters(
    path: &JsonPathExpression,
    root: &Value,
    filters: &mut ContextFilters,
) -> JsonPathResult<EvaluationResult> {
    if !matches!(root, Value::Array(_) | Value::Object(_)) {
        return Err(not_a_container_error(root));
    }

    log::debug!("evaluating JSONPath '{}'", path.original());

    let mut cursor = Cursor::Node(root);
    let mut array_mode = false;

    for token in path.tokens() {
        let bound = match token {
            PathToken::Predicate(PredicateToken::Placeholder) => {
                Some(filters.bind_placeholder(token)?)
            }
            PathToken::Predicate(PredicateToken::Inline { source, .. }) => {
                filters.record_applied(source);
                None
            }
            _ => None,
        };
        let predicate = predicate_for(token, bound.as_ref());

        cursor = match cursor {
            Cursor::Missing => Cursor::Missing,
            Cursor::Node(node) => apply_to_node(token, node, root, predicate)?,
            Cursor::Nodes(nodes) => Cursor::Nodes(apply_to_nodes(token, nodes, root, predicate)),
        };
        array_mode |= token.is_array_filter();
    }

    let nodes: Vec<Value> = match cursor {
        Cursor::Node(node) => vec![node.clone()],
        Cursor::Missing => Vec::new(),
        Cursor::Nodes(nodes) => nodes.into_iter().cloned().collect(),
    };

    log::debug!(
        "JSONPath '{}' matched {} node(s), array mode: {}",
        path.original(),
        nodes.len(),
        array_mode
    );
    Ok(EvaluationResult::new(nodes, array_mode))
}

fn predicate_for<'a>(
    token: &'a PathToken,
    bound: Option<&'a Predicate>,
) -> Option<&'a FilterExpression> {
    match token {
        PathToken::Predicate(PredicateToken::Inline { expression, .. }) => Some(expression),
        PathToken::Predicate(PredicateToken::Placeholder) => bound.map(Predicate::expression),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jsonpath::error::JsonPathError;

    fn run(path: &str, doc: &Value) -> EvaluationResult {
        CoreJsonPathEvaluator::new(path)
            .expect("path should compile")
            .evaluate(doc)
            .expect("evaluation should succeed")
    }

    #[test]
    fn test_definite_path() {
        let result = run("$.a.b", &json!({"a": {"b": 5}}));
        assert_eq!(result.nodes(), [json!(5)]);
        assert!(!result.array_mode());
    }

    #[test]
    fn test_missing_member_is_no_match() {
        let result = run("$.b.c[0]", &json!({"a": 1}));
        assert!(result.is_empty());
        assert!(!result.array_mode());
    }

    #[test]
    fn test_fan_out_switches_to_array_mode() {
        let result = run("$.items[*]", &json!({"items": [1, 2, 3]}));
        assert_eq!(result.nodes(), [json!(1), json!(2), json!(3)]);
        assert!(result.array_mode());
    }

    #[test]
    fn test_array_mode_survives_empty_match() {
        let result = run("$.missing[*]", &json!({"a": 1}));
        assert!(result.is_empty());
        assert!(result.array_mode());
    }

    #[test]
    fn test_scalar_root_is_rejected() {
        let evaluator = CoreJsonPathEvaluator::new("$").expect("path should compile");
        assert!(matches!(
            evaluator.evaluate(&json!(42)),
            Err(JsonPathError::NotAContainer { found: "number" })
        ));
    }

    #[test]
    fn test_array_mode_skips_misfits() {
        let doc = json!({"items": [{"id": 1}, 7, {"id": 3}, [4]]});
        let result = run("$.items[*].id", &doc);
        assert_eq!(result.nodes(), [json!(1), json!(3)]);
    }

    #[test]
    fn test_placeholder_uses_caller_predicate() {
        let evaluator = CoreJsonPathEvaluator::new("$.items[?]").expect("path should compile");
        let mut filters =
            ContextFilters::with_predicates([Predicate::parse("@ > 1").expect("should parse")]);
        let result = evaluator
            .evaluate_with_filters(&json!({"items": [1, 2, 3]}), &mut filters)
            .expect("evaluation should succeed");
        assert_eq!(result.nodes(), [json!(2), json!(3)]);
        assert_eq!(filters.applied(), ["@ > 1".to_string()]);
    }
}
