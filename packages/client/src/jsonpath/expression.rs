//! Compiled `JSONPath` expression
//!
//! An immutable token chain plus the text it was compiled from. Compiled
//! paths hold no evaluation state and can be shared freely across threads.

use std::fmt;

use crate::jsonpath::ast::{PathToken, PredicateToken};

/// Compiled `JSONPath` expression
#[derive(Debug, Clone)]
pub struct JsonPathExpression {
    /// Token chain applied left to right
    tokens: Vec<PathToken>,
    /// Trimmed expression text
    original: String,
}

/// Name used by callers that think in terms of compiled paths
pub type CompiledPath = JsonPathExpression;

impl JsonPathExpression {
    /// Create new `JsonPathExpression`
    #[inline]
    #[must_use]
    pub fn new(tokens: Vec<PathToken>, original: String) -> Self {
        Self { tokens, original }
    }

    /// Get original `JSONPath` expression string
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get compiled token chain
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    /// Whether any token can fan out, i.e. evaluation ends in array mode
    #[inline]
    #[must_use]
    pub fn has_array_filter(&self) -> bool {
        self.tokens.iter().any(PathToken::is_array_filter)
    }

    /// Check if expression has recursive descent
    #[inline]
    #[must_use]
    pub fn has_recursive_descent(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, PathToken::RecursiveDescent))
    }

    /// Number of `[?]` placeholders waiting for caller predicates
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PathToken::Predicate(PredicateToken::Placeholder)))
            .count()
    }
}

impl fmt::Display for JsonPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use crate::jsonpath::compiler::JsonPathParser;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_compiled_path_is_shareable() {
        assert_send_sync::<super::CompiledPath>();
    }

    #[test]
    fn test_placeholder_count() {
        let compiled =
            JsonPathParser::compile("$.a[?][?(@.x)][?]").expect("should compile");
        assert_eq!(compiled.placeholder_count(), 2);
        assert!(compiled.has_array_filter());
        assert!(!compiled.has_recursive_descent());
    }
}
