//! Result normalization into the four activity outputs
//!
//! Every matched node is rendered twice: as display text and as compact
//! JSON. The first rendering of each kind is also exposed on its own, with an
//! explicit marker when the path matched nothing.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::jsonpath::core_evaluator::EvaluationResult;

/// Text carried by [`NodeValue::NoValueProduced`] when it is displayed
pub const NO_VALUE_PRODUCED: &str = "No value produced";

/// Rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizerOptions {
    /// Text used for a JSON `null` in the text outputs, empty by default
    pub null_text: String,
}

/// A single-value output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeValue {
    /// Rendering of the first matched node
    Value(String),
    /// The path matched nothing
    NoValueProduced,
}

impl NodeValue {
    /// The rendered text, if a value was produced
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeValue::Value(text) => Some(text),
            NodeValue::NoValueProduced => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_produced(&self) -> bool {
        matches!(self, NodeValue::Value(_))
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Value(text) => f.write_str(text),
            NodeValue::NoValueProduced => f.write_str(NO_VALUE_PRODUCED),
        }
    }
}

/// The four outputs of one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOutputs {
    /// Text rendering of the first match
    pub first_value_as_text: NodeValue,
    /// JSON rendering of the first match
    pub first_value_as_json: NodeValue,
    /// Text rendering of every match, in order
    pub all_values_as_text: Vec<String>,
    /// JSON rendering of every match, in order
    pub all_values_as_json: Vec<String>,
}

/// Render an evaluation result
///
/// The list outputs hold one entry per matched node whether or not the walk
/// ended in array mode; a single match that is itself an array stays a single
/// entry.
#[must_use]
pub fn normalize(result: EvaluationResult, options: &NormalizerOptions) -> NormalizedOutputs {
    let nodes = result.into_nodes();
    let all_values_as_text: Vec<String> =
        nodes.iter().map(|node| render_text(node, options)).collect();
    let all_values_as_json: Vec<String> = nodes.iter().map(render_json).collect();

    NormalizedOutputs {
        first_value_as_text: first_of(&all_values_as_text),
        first_value_as_json: first_of(&all_values_as_json),
        all_values_as_text,
        all_values_as_json,
    }
}

/// Text form of a node: strings unquoted, `null` as the configured text,
/// everything else as compact JSON
#[must_use]
pub fn render_text(node: &Value, options: &NormalizerOptions) -> String {
    match node {
        Value::Null => options.null_text.clone(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compact JSON form of a node
#[inline]
#[must_use]
pub fn render_json(node: &Value) -> String {
    node.to_string()
}

fn first_of(rendered: &[String]) -> NodeValue {
    rendered
        .first()
        .map_or(NodeValue::NoValueProduced, |text| NodeValue::Value(text.clone()))
}
