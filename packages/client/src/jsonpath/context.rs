//! Caller-owned engine context
//!
//! Bundles compile and rendering options and exposes the compile, evaluate
//! and normalize steps. A context is plain data: build one per host, or per
//! call, and share it freely.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::jsonpath::{
    compiler::{CompileOptions, JsonPathParser},
    core_evaluator::{self, ContextFilters, EvaluationResult},
    error::{JsonPathResult, invalid_input_document_error},
    expression::JsonPathExpression,
    normalizer::{self, NormalizedOutputs, NormalizerOptions},
};

/// Engine options plus the pipeline entry points
///
/// Loadable from JSON, e.g. `{"normalizer": {"nullText": "null"}}`; absent
/// fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationContext {
    /// Options used when compiling expressions and predicates
    pub compile: CompileOptions,
    /// Options used when rendering matches
    pub normalizer: NormalizerOptions,
}

impl EvaluationContext {
    /// Context with default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text rendered for JSON `null`
    #[must_use]
    pub fn with_null_text(mut self, text: impl Into<String>) -> Self {
        self.normalizer.null_text = text.into();
        self
    }

    /// Bound the compiled size of predicate regexes
    #[must_use]
    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.compile.regex_size_limit = Some(limit);
        self
    }

    /// Compile an expression with this context's options
    ///
    /// # Errors
    /// See [`JsonPathParser::compile`].
    #[inline]
    pub fn compile(&self, expression: &str) -> JsonPathResult<JsonPathExpression> {
        JsonPathParser::compile_with_options(expression, self.compile)
    }

    /// Evaluate a compiled path
    ///
    /// # Errors
    /// See [`core_evaluator::evaluate`].
    #[inline]
    pub fn evaluate(
        &self,
        path: &JsonPathExpression,
        root: &Value,
    ) -> JsonPathResult<EvaluationResult> {
        core_evaluator::evaluate(path, root)
    }

    /// Evaluate a compiled path with caller predicates for `[?]` placeholders
    ///
    /// # Errors
    /// See [`core_evaluator::evaluate_with_filters`].
    #[inline]
    pub fn evaluate_with_filters(
        &self,
        path: &JsonPathExpression,
        root: &Value,
        filters: &mut ContextFilters,
    ) -> JsonPathResult<EvaluationResult> {
        core_evaluator::evaluate_with_filters(path, root, filters)
    }

    /// Render an evaluation result into the four outputs
    #[inline]
    #[must_use]
    pub fn normalize(&self, result: EvaluationResult) -> NormalizedOutputs {
        normalizer::normalize(result, &self.normalizer)
    }

    /// Compile, evaluate and normalize in one step
    ///
    /// # Errors
    /// Any compile or evaluation error.
    pub fn read(&self, expression: &str, root: &Value) -> JsonPathResult<NormalizedOutputs> {
        let path = self.compile(expression)?;
        let result = self.evaluate(&path, root)?;
        Ok(self.normalize(result))
    }

    /// Parse a JSON document from text
    ///
    /// # Errors
    /// `InvalidInputDocument` for blank or malformed text.
    pub fn parse_document(&self, text: &str) -> JsonPathResult<Value> {
        if text.trim().is_empty() {
            return Err(invalid_input_document_error("document is empty"));
        }
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::jsonpath::{error::JsonPathError, normalizer::NodeValue};

    #[test]
    fn test_read_pipeline() {
        let context = EvaluationContext::new();
        let outputs = context
            .read("$.items[*]", &json!({"items": ["x", 2]}))
            .expect("read should succeed");
        assert_eq!(outputs.all_values_as_text, vec!["x", "2"]);
        assert_eq!(outputs.all_values_as_json, vec![r#""x""#, "2"]);
        assert_eq!(outputs.first_value_as_text, NodeValue::Value("x".into()));
    }

    #[test]
    fn test_context_from_json() {
        let context: EvaluationContext =
            serde_json::from_value(json!({"normalizer": {"nullText": "null"}}))
                .expect("context should deserialize");
        assert_eq!(context.normalizer.null_text, "null");
        assert_eq!(context.compile, CompileOptions::default());

        let outputs = context
            .read("$.a", &json!({"a": null}))
            .expect("read should succeed");
        assert_eq!(outputs.first_value_as_text, NodeValue::Value("null".into()));
    }

    #[test]
    fn test_parse_document_errors() {
        let context = EvaluationContext::new();
        assert!(matches!(
            context.parse_document("  "),
            Err(JsonPathError::InvalidInputDocument { .. })
        ));
        assert!(matches!(
            context.parse_document("{\"a\":"),
            Err(JsonPathError::InvalidInputDocument { .. })
        ));
        assert!(context.parse_document("[1]").is_ok());
    }
}
