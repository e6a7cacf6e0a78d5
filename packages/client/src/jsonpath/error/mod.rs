//! JSONPath error handling module
//!
//! Error types and constructor helpers shared by the compiler, the evaluator
//! and the activity layer built on top of them.

mod constructors;
mod types;

pub use constructors::{
    empty_expression_error, invalid_expression_error, invalid_input_document_error,
    json_type_name, not_a_container_error, path_application_error,
};
pub use types::{JsonPathError, JsonPathResult};
