//! Activity configuration bean
//!
//! Serialized with camelCase keys (`jsonPathAsString`, `jsonText`) so stored
//! workflow definitions stay readable by hosts that use those names.

use jsonpath_activity_core::jsonpath::{JsonPathError, JsonPathParser, ValidationStatus};
use serde::{Deserialize, Serialize};

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("JsonPath expression is missing")]
    EmptyJsonPath,

    #[error("JsonPath expression is invalid: {0}")]
    InvalidJsonPath(#[source] JsonPathError),
}

impl From<JsonPathError> for ConfigurationError {
    fn from(e: JsonPathError) -> Self {
        match e {
            JsonPathError::EmptyExpression => ConfigurationError::EmptyJsonPath,
            other => ConfigurationError::InvalidJsonPath(other),
        }
    }
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` describing the first problem found.
    fn validate(&self) -> ConfigResult<()>;
}

/// What one activity instance does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPathActivityConfig {
    /// Expression applied to every input document
    #[serde(default)]
    pub json_path_as_string: String,

    /// Example document the expression was written against, editor only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_text: Option<String>,
}

impl Default for JsonPathActivityConfig {
    /// The root path `$` and no example document
    fn default() -> Self {
        Self::new("$")
    }
}

impl JsonPathActivityConfig {
    /// Configuration for `json_path` without an example document
    #[must_use]
    pub fn new(json_path: impl Into<String>) -> Self {
        Self {
            json_path_as_string: json_path.into(),
            json_text: None,
        }
    }

    /// Attach an example document
    #[must_use]
    pub fn with_json_text(mut self, json_text: impl Into<String>) -> Self {
        self.json_text = Some(json_text.into());
        self
    }

    /// Classify an expression the way the configuration panel does
    #[inline]
    #[must_use]
    pub fn validate_json_path(json_path: &str) -> ValidationStatus {
        JsonPathParser::validate(json_path)
    }

    /// Whether the configured expression compiles
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::validate_json_path(&self.json_path_as_string).is_valid()
    }

    /// Whether a non-blank example document is attached
    #[must_use]
    pub fn has_example_document(&self) -> bool {
        self.json_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}

impl Validator for JsonPathActivityConfig {
    fn validate(&self) -> ConfigResult<()> {
        JsonPathParser::compile(&self.json_path_as_string)
            .map(|_| ())
            .map_err(ConfigurationError::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_instance() {
        let config = JsonPathActivityConfig::default();
        assert_eq!(config.json_path_as_string, "$");
        assert!(config.json_text.is_none());
        assert!(config.is_valid());
        assert!(!config.has_example_document());
    }

    #[test]
    fn test_bean_field_names() {
        let config = JsonPathActivityConfig::new("$.a").with_json_text("{\"a\": 1}");
        let value = serde_json::to_value(&config).expect("config should serialize");
        assert_eq!(value, json!({"jsonPathAsString": "$.a", "jsonText": "{\"a\": 1}"}));

        let parsed: JsonPathActivityConfig =
            serde_json::from_value(json!({"jsonText": " "})).expect("config should deserialize");
        assert_eq!(parsed.json_path_as_string, "");
        assert!(!parsed.has_example_document());
    }

    #[test]
    fn test_validator() {
        assert!(JsonPathActivityConfig::new("$.a").validate().is_ok());
        assert!(matches!(
            JsonPathActivityConfig::new("  ").validate(),
            Err(ConfigurationError::EmptyJsonPath)
        ));
        assert!(matches!(
            JsonPathActivityConfig::new("$[").validate(),
            Err(ConfigurationError::InvalidJsonPath(JsonPathError::InvalidExpression { .. }))
        ));
    }
}
