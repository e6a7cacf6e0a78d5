//! Caller-supplied predicates bound to `[?]` placeholders

use std::{fmt, str::FromStr};

use serde_json::Value;

use super::core::FilterEvaluator;
use crate::jsonpath::{
    ast::FilterExpression,
    compiler::CompileOptions,
    error::{JsonPathError, JsonPathResult},
    filter_parser::FilterParser,
};

/// A parsed predicate, written the way it would appear inside `[?(...)]`
#[derive(Debug, Clone)]
pub struct Predicate {
    source: String,
    expression: FilterExpression,
}

impl Predicate {
    /// Parse predicate text such as `@.price < 10`
    ///
    /// # Errors
    ///
    /// `EmptyExpression` for blank text, `InvalidExpression` otherwise.
    pub fn parse(text: &str) -> JsonPathResult<Self> {
        Self::parse_with_options(text, CompileOptions::default())
    }

    /// Parse with explicit compile options
    ///
    /// # Errors
    ///
    /// Same as [`Predicate::parse`].
    pub fn parse_with_options(text: &str, options: CompileOptions) -> JsonPathResult<Self> {
        let expression = FilterParser::parse_standalone(text, options)?;
        Ok(Self {
            source: text.trim().to_string(),
            expression,
        })
    }

    /// Predicate text as given
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed expression tree
    #[inline]
    #[must_use]
    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }

    /// Test `current`, resolving `$` references against `root`
    #[inline]
    #[must_use]
    pub fn test(&self, current: &Value, root: &Value) -> bool {
        FilterEvaluator::evaluate_predicate(current, root, &self.expression)
    }
}

impl FromStr for Predicate {
    type Err = JsonPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_and_test() {
        let predicate: Predicate = " @.active == true ".parse().expect("should parse");
        assert_eq!(predicate.source(), "@.active == true");
        assert!(predicate.test(&json!({"active": true}), &json!({})));
        assert!(!predicate.test(&json!({"active": "yes"}), &json!({})));
    }

    #[test]
    fn test_rejects_trailing_tokens() {
        assert!(Predicate::parse("@.a == 1 ]").is_err());
        assert!(Predicate::parse("@.a == ").is_err());
        assert!(matches!(Predicate::parse("  "), Err(JsonPathError::EmptyExpression)));
    }
}
