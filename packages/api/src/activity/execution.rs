//! Activity lifecycle: configure once, execute per document
//!
//! The compiled path is cached on configuration, so executing never
//! recompiles the expression.

use std::collections::BTreeMap;

use jsonpath_activity_core::jsonpath::{
    CompiledPath, EvaluationContext, JsonPathError, NodeValue, NormalizedOutputs,
};

use super::{
    config::{ConfigurationError, JsonPathActivityConfig},
    error::ActivityError,
    ports::{IN_JSON, OUT_JSON, OUT_TEXT, SINGLE_VALUE_JSON, SINGLE_VALUE_TEXT},
};

/// Values on the input ports, keyed by port name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityInputs {
    values: BTreeMap<String, String>,
}

impl ActivityInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs carrying `json_text` on the document port
    #[must_use]
    pub fn from_json_text(json_text: impl Into<String>) -> Self {
        let mut inputs = Self::new();
        inputs.insert(IN_JSON, json_text);
        inputs
    }

    pub fn insert(&mut self, port: impl Into<String>, value: impl Into<String>) {
        self.values.insert(port.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, port: &str) -> Option<&str> {
        self.values.get(port).map(String::as_str)
    }
}

/// Value on one output port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortValue<'a> {
    /// Depth 0 port
    Single(&'a NodeValue),
    /// Depth 1 port
    List(&'a [String]),
}

/// Values on the four output ports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutputs {
    outputs: NormalizedOutputs,
    array_mode: bool,
}

impl ActivityOutputs {
    /// Value on `firstNode`
    #[inline]
    #[must_use]
    pub fn first_node(&self) -> &NodeValue {
        &self.outputs.first_value_as_text
    }

    /// Value on `firstNodeAsJSON`
    #[inline]
    #[must_use]
    pub fn first_node_as_json(&self) -> &NodeValue {
        &self.outputs.first_value_as_json
    }

    /// Value on `nodelist`
    #[inline]
    #[must_use]
    pub fn node_list(&self) -> &[String] {
        &self.outputs.all_values_as_text
    }

    /// Value on `nodelistAsJSON`
    #[inline]
    #[must_use]
    pub fn node_list_as_json(&self) -> &[String] {
        &self.outputs.all_values_as_json
    }

    /// Whether the expression fanned out while matching
    #[inline]
    #[must_use]
    pub fn array_mode(&self) -> bool {
        self.array_mode
    }

    /// Value on the named output port
    #[must_use]
    pub fn get(&self, port: &str) -> Option<PortValue<'_>> {
        match port {
            SINGLE_VALUE_TEXT => Some(PortValue::Single(self.first_node())),
            SINGLE_VALUE_JSON => Some(PortValue::Single(self.first_node_as_json())),
            OUT_TEXT => Some(PortValue::List(self.node_list())),
            OUT_JSON => Some(PortValue::List(self.node_list_as_json())),
            _ => None,
        }
    }

    /// Take the rendered outputs
    #[must_use]
    pub fn into_normalized(self) -> NormalizedOutputs {
        self.outputs
    }
}

/// One configured JSONPath workflow step
#[derive(Debug, Clone, Default)]
pub struct JsonPathActivity {
    configuration: Option<JsonPathActivityConfig>,
    compiled: Option<CompiledPath>,
    context: EvaluationContext,
}

impl JsonPathActivity {
    /// Unconfigured activity with default engine options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconfigured activity using `context` for every execution
    #[must_use]
    pub fn with_context(context: EvaluationContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    /// Apply a configuration, replacing any previous one
    ///
    /// # Errors
    ///
    /// `ActivityError::InvalidConfiguration` when the expression is blank or
    /// does not compile; the previous configuration is then kept.
    pub fn configure(&mut self, configuration: JsonPathActivityConfig) -> Result<(), ActivityError> {
        let compiled = match self.context.compile(&configuration.json_path_as_string) {
            Ok(compiled) => compiled,
            Err(e) => {
                let e = ConfigurationError::from(e);
                log::warn!(
                    "rejecting JsonPath activity configuration '{}': {}",
                    configuration.json_path_as_string,
                    e
                );
                return Err(e.into());
            }
        };

        log::debug!("configured JsonPath activity with '{}'", compiled.original());
        self.compiled = Some(compiled);
        self.configuration = Some(configuration);
        Ok(())
    }

    /// Current configuration, `None` until [`configure`](Self::configure) succeeds
    #[inline]
    #[must_use]
    pub fn configuration(&self) -> Option<&JsonPathActivityConfig> {
        self.configuration.as_ref()
    }

    /// Engine options used by [`execute`](Self::execute)
    #[inline]
    #[must_use]
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// Run the configured expression over the document on the input port
    ///
    /// # Errors
    ///
    /// - `NotConfigured` before a successful [`configure`](Self::configure)
    /// - `EmptyInput` when the document port is absent or empty
    /// - `InvalidInputDocument` when the document is not JSON
    /// - `JsonPath` for evaluation errors, e.g. a scalar document
    pub fn execute(&self, inputs: &ActivityInputs) -> Result<ActivityOutputs, ActivityError> {
        let compiled = self.compiled.as_ref().ok_or(ActivityError::NotConfigured)?;

        let json_text = inputs.get(IN_JSON).unwrap_or_default();
        if json_text.is_empty() {
            return Err(ActivityError::EmptyInput);
        }

        let document = self
            .context
            .parse_document(json_text)
            .map_err(|e| match e {
                JsonPathError::InvalidInputDocument { message } => {
                    ActivityError::InvalidInputDocument(message)
                }
                other => ActivityError::JsonPath(other),
            })?;

        let result = self.context.evaluate(compiled, &document)?;
        let array_mode = result.array_mode();
        let outputs = self.context.normalize(result);

        tracing::debug!(
            target: "jsonpath_activity::activity",
            expression = %compiled.original(),
            matches = outputs.all_values_as_text.len(),
            array_mode = array_mode,
            "JsonPath activity executed"
        );

        Ok(ActivityOutputs {
            outputs,
            array_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_configuration_keeps_previous() {
        let mut activity = JsonPathActivity::new();
        activity
            .configure(JsonPathActivityConfig::new("$.a"))
            .expect("valid configuration");
        assert!(matches!(
            activity.configure(JsonPathActivityConfig::new("$[")),
            Err(ActivityError::InvalidConfiguration(_))
        ));
        assert_eq!(
            activity.configuration().map(|c| c.json_path_as_string.as_str()),
            Some("$.a")
        );
    }

    #[test]
    fn test_execute_requires_configuration() {
        let activity = JsonPathActivity::new();
        assert!(matches!(
            activity.execute(&ActivityInputs::from_json_text("{}")),
            Err(ActivityError::NotConfigured)
        ));
    }

    #[test]
    fn test_output_ports_by_name() {
        let mut activity = JsonPathActivity::new();
        activity
            .configure(JsonPathActivityConfig::new("$.a"))
            .expect("valid configuration");
        let outputs = activity
            .execute(&ActivityInputs::from_json_text(r#"{"a": "x"}"#))
            .expect("execution should succeed");
        assert_eq!(
            outputs.get(SINGLE_VALUE_JSON),
            Some(PortValue::Single(&NodeValue::Value("\"x\"".into())))
        );
        assert_eq!(outputs.get(OUT_TEXT), Some(PortValue::List(&["x".to_string()])));
        assert_eq!(outputs.get(IN_JSON), None);
    }
}
