//! Activity error types

use jsonpath_activity_core::jsonpath::JsonPathError;

use super::config::ConfigurationError;

/// Errors reported by [`JsonPathActivity`](super::JsonPathActivity)
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Invalid configuration of JsonPath activity: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("JsonPath activity is not configured")]
    NotConfigured,

    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid input document: {0}")]
    InvalidInputDocument(String),

    #[error("JsonPath processing failed: {0}")]
    JsonPath(#[from] JsonPathError),
}
