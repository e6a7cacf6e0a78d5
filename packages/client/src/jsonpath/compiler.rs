//! `JSONPath` expression compiler and entry point
//!
//! Provides the main parser interface for compiling `JSONPath` expressions
//! into ordered path token chains, plus the tri-state validation used by
//! configuration checks.

use serde::{Deserialize, Serialize};

use crate::jsonpath::{
    error::{JsonPathError, JsonPathResult, empty_expression_error, invalid_expression_error},
    expression::JsonPathExpression,
    tokenizer::ExpressionParser,
};

/// Options applied while compiling an expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Upper bound in bytes on a compiled predicate regex, `None` keeps the
    /// regex crate default
    pub regex_size_limit: Option<usize>,
}

/// Outcome of [`JsonPathParser::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// The expression compiles
    Valid,
    /// Nothing but whitespace was given
    Empty,
    /// The expression does not compile
    Invalid,
}

impl ValidationStatus {
    /// Whether the status is [`ValidationStatus::Valid`]
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }
}

/// `JSONPath` expression parser and compiler
pub struct JsonPathParser;

impl JsonPathParser {
    /// Compile `JSONPath` expression into its token chain
    ///
    /// # Arguments
    ///
    /// * `expression` - `JSONPath` expression string (e.g., "$.data[*]", "$.items[?(@.active)]")
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::EmptyExpression` for blank input and
    /// `JsonPathError::InvalidExpression` for anything the grammar rejects.
    pub fn compile(expression: &str) -> JsonPathResult<JsonPathExpression> {
        Self::compile_with_options(expression, CompileOptions::default())
    }

    /// Compile with explicit [`CompileOptions`]
    ///
    /// # Errors
    ///
    /// Same as [`JsonPathParser::compile`].
    pub fn compile_with_options(
        expression: &str,
        options: CompileOptions,
    ) -> JsonPathResult<JsonPathExpression> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(empty_expression_error());
        }

        if expression.starts_with('@') {
            return Err(invalid_expression_error(
                expression,
                "current node identifier '@' is only valid within filter expressions [?...]",
                Some(0),
            ));
        }

        let tokens = ExpressionParser::new(expression)
            .with_options(options)
            .parse()?;

        let compiled = JsonPathExpression::new(tokens, expression.to_string());
        log::debug!(
            "compiled JSONPath '{}' into {} tokens (array filter: {})",
            compiled.original(),
            compiled.tokens().len(),
            compiled.has_array_filter()
        );
        Ok(compiled)
    }

    /// Classify an expression as valid, empty or invalid
    ///
    /// Shares the grammar of [`JsonPathParser::compile`], so whatever
    /// validates also compiles.
    #[must_use]
    pub fn validate(expression: &str) -> ValidationStatus {
        match Self::compile(expression) {
            Ok(_) => ValidationStatus::Valid,
            Err(JsonPathError::EmptyExpression) => ValidationStatus::Empty,
            Err(e) => {
                log::debug!("JSONPath '{}' failed validation: {}", expression.trim(), e);
                ValidationStatus::Invalid
            }
        }
    }
}
