//! Error constructor functions
//!
//! Factory helpers for creating JSONPath errors with proper context.

use serde_json::Value;

use super::types::JsonPathError;

/// Creates an empty expression error
#[must_use]
pub fn empty_expression_error() -> JsonPathError {
    JsonPathError::EmptyExpression
}

/// Creates an invalid JSONPath expression error
///
/// # Arguments
/// * `expression` - The invalid JSONPath expression
/// * `reason` - Specific reason why the expression is invalid
/// * `position` - Optional character position where error occurred
///
/// # Examples
/// ```
/// use jsonpath_activity_core::jsonpath::error::invalid_expression_error;
///
/// let error = invalid_expression_error("$.users[", "expected ']'", Some(8));
/// assert!(error.is_compile_error());
/// ```
pub fn invalid_expression_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    JsonPathError::InvalidExpression {
        expression: expression.into(),
        reason: reason.into(),
        position,
    }
}

/// Creates an invalid input document error from a parser diagnostic
pub fn invalid_input_document_error(message: impl Into<String>) -> JsonPathError {
    JsonPathError::InvalidInputDocument {
        message: message.into(),
    }
}

/// Creates a not-a-container error for the given root value
#[must_use]
pub fn not_a_container_error(root: &Value) -> JsonPathError {
    JsonPathError::NotAContainer {
        found: json_type_name(root),
    }
}

/// Creates a path application error for the failing token
pub fn path_application_error(
    token: impl Into<String>,
    message: impl Into<String>,
) -> JsonPathError {
    JsonPathError::PathApplicationError {
        token: token.into(),
        message: message.into(),
    }
}

/// JSON type name used in diagnostics
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<serde_json::Error> for JsonPathError {
    fn from(error: serde_json::Error) -> Self {
        invalid_input_document_error(error.to_string())
    }
}
