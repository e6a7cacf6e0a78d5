//! Tests for result normalization
//!
//! The four outputs for definite paths, fan-outs, nulls and empty matches.

use jsonpath_activity_core::jsonpath::{
    EvaluationContext, EvaluationResult, NO_VALUE_PRODUCED, NodeValue, NormalizedOutputs,
    NormalizerOptions, normalize,
};
use serde_json::{Value, json};

fn read(path: &str, doc: &Value) -> NormalizedOutputs {
    EvaluationContext::new()
        .read(path, doc)
        .expect("read should succeed")
}

#[test]
fn test_definite_number() {
    let outputs = read("$.a.b", &json!({"a": {"b": 5}}));
    assert_eq!(outputs.first_value_as_text, NodeValue::Value("5".into()));
    assert_eq!(outputs.first_value_as_json, NodeValue::Value("5".into()));
    assert_eq!(outputs.all_values_as_text, vec!["5"]);
    assert_eq!(outputs.all_values_as_json, vec!["5"]);
}

#[test]
fn test_fan_out_over_items() {
    let outputs = read("$.items[*]", &json!({"items": [1, 2, 3]}));
    assert_eq!(outputs.all_values_as_text, vec!["1", "2", "3"]);
    assert_eq!(outputs.all_values_as_json, vec!["1", "2", "3"]);
    assert_eq!(outputs.first_value_as_text, NodeValue::Value("1".into()));
}

#[test]
fn test_null_value() {
    let outputs = read("$.a", &json!({"a": null}));
    assert_eq!(outputs.first_value_as_text, NodeValue::Value(String::new()));
    assert_eq!(outputs.first_value_as_json, NodeValue::Value("null".into()));
    assert_eq!(outputs.all_values_as_text, vec![""]);
    assert_eq!(outputs.all_values_as_json, vec!["null"]);
}

#[test]
fn test_no_match() {
    let outputs = read("$.b", &json!({"a": 1}));
    assert!(outputs.all_values_as_text.is_empty());
    assert!(outputs.all_values_as_json.is_empty());
    assert_eq!(outputs.first_value_as_text, NodeValue::NoValueProduced);
    assert_eq!(outputs.first_value_as_json, NodeValue::NoValueProduced);
    assert_eq!(outputs.first_value_as_json.to_string(), NO_VALUE_PRODUCED);
}

#[test]
fn test_strings_and_containers() {
    let doc = json!({"s": "he said \"hi\"", "o": {"z": 1, "a": [true, null]}});
    let outputs = read("$['s','o']", &doc);
    assert_eq!(
        outputs.all_values_as_text,
        vec!["he said \"hi\"", r#"{"z":1,"a":[true,null]}"#]
    );
    assert_eq!(
        outputs.all_values_as_json,
        vec![r#""he said \"hi\"""#, r#"{"z":1,"a":[true,null]}"#]
    );
}

#[test]
fn test_single_array_match_is_one_entry() {
    let outputs = read("$.a", &json!({"a": [1, 2]}));
    assert_eq!(outputs.all_values_as_text, vec!["[1,2]"]);
    assert_eq!(outputs.first_value_as_json, NodeValue::Value("[1,2]".into()));
}

#[test]
fn test_numbers_keep_their_form() {
    let outputs = read("$[*]", &json!([1, 1.5, -2, 1e3, 2.0]));
    assert_eq!(outputs.all_values_as_text, vec!["1", "1.5", "-2", "1000.0", "2.0"]);
}

#[test]
fn test_null_text_option() {
    let options = NormalizerOptions {
        null_text: "NULL".into(),
    };
    let result = EvaluationResult::new(vec![json!(null), json!("x")], true);
    let outputs = normalize(result, &options);
    assert_eq!(outputs.all_values_as_text, vec!["NULL", "x"]);
    assert_eq!(outputs.all_values_as_json, vec!["null", "\"x\""]);
}

#[test]
fn test_node_value_accessors() {
    let value = NodeValue::Value("x".into());
    assert_eq!(value.as_str(), Some("x"));
    assert!(value.is_produced());
    assert_eq!(NodeValue::NoValueProduced.as_str(), None);
    assert!(!NodeValue::NoValueProduced.is_produced());
}
