//! JSON Path Error Types
//!
//! Core error types for JSONPath compilation and evaluation.

/// JSONPath compilation and evaluation errors
///
/// Every variant aborts the whole call. "Matched nothing" is not an error; it
/// is reported on the output side as [`NodeValue::NoValueProduced`].
///
/// [`NodeValue::NoValueProduced`]: crate::jsonpath::normalizer::NodeValue::NoValueProduced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonPathError {
    /// The expression text was empty or whitespace only
    #[error("JsonPath expression is empty")]
    EmptyExpression,

    /// The expression failed structural grammar validation
    #[error("Invalid expression '{expression}': {reason}{}", fmt_position(.position))]
    InvalidExpression {
        /// The offending expression text
        expression: String,
        /// Parser diagnostic
        reason: String,
        /// Character offset of the problem, when known
        position: Option<usize>,
    },

    /// Caller-supplied JSON text could not be parsed
    #[error("Invalid input JSON document: {message}")]
    InvalidInputDocument {
        /// Parser diagnostic from the JSON parser
        message: String,
    },

    /// The root value is a scalar, JSONPath traversal needs an array or object
    #[error("JsonPath can only be applied to an array or object, found {found}")]
    NotAContainer {
        /// JSON type name of the rejected root
        found: &'static str,
    },

    /// A path token could not be applied to the current value shape
    #[error("Cannot apply '{token}': {message}")]
    PathApplicationError {
        /// Description of the failing token
        token: String,
        /// What went wrong
        message: String,
    },
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" at position {pos}"),
        None => String::new(),
    }
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    /// Whether this error was raised while compiling the expression
    #[must_use]
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            JsonPathError::EmptyExpression | JsonPathError::InvalidExpression { .. }
        )
    }

    /// Whether this error was raised while applying the path to a document
    #[must_use]
    pub fn is_evaluation_error(&self) -> bool {
        matches!(
            self,
            JsonPathError::NotAContainer { .. } | JsonPathError::PathApplicationError { .. }
        )
    }
}
