//! Integration tests for configuring and executing the activity

use jsonpath_activity::activity::{
    ActivityError, ActivityInputs, ConfigurationError, IN_JSON, JsonPathActivity,
    JsonPathActivityConfig, OUT_JSON, OUT_TEXT, PortValue, SINGLE_VALUE_JSON, SINGLE_VALUE_TEXT,
};
use jsonpath_activity::{EvaluationContext, JsonPathError, NodeValue};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn configured(path: &str) -> JsonPathActivity {
    let mut activity = JsonPathActivity::new();
    activity
        .configure(JsonPathActivityConfig::new(path))
        .expect("configuration should be accepted");
    activity
}

#[test]
fn test_fan_out_document() {
    init_logging();
    let activity = configured("$.items[*]");
    let outputs = activity
        .execute(&ActivityInputs::from_json_text(r#"{"items": [1, 2, 3]}"#))
        .expect("execution should succeed");

    assert!(outputs.array_mode());
    assert_eq!(outputs.first_node(), &NodeValue::Value("1".into()));
    assert_eq!(outputs.first_node_as_json(), &NodeValue::Value("1".into()));
    assert_eq!(outputs.node_list(), ["1", "2", "3"]);
    assert_eq!(outputs.node_list_as_json(), ["1", "2", "3"]);
}

#[test]
fn test_every_output_port_is_populated() {
    init_logging();
    let activity = configured("$.store.book[*].author");
    let json = r#"{"store": {"book": [{"author": "Nigel Rees"}, {"author": "Evelyn Waugh"}]}}"#;
    let outputs = activity
        .execute(&ActivityInputs::from_json_text(json))
        .expect("execution should succeed");

    assert_eq!(
        outputs.get(SINGLE_VALUE_TEXT),
        Some(PortValue::Single(&NodeValue::Value("Nigel Rees".into())))
    );
    assert_eq!(
        outputs.get(SINGLE_VALUE_JSON),
        Some(PortValue::Single(&NodeValue::Value("\"Nigel Rees\"".into())))
    );
    assert_eq!(
        outputs.get(OUT_TEXT),
        Some(PortValue::List(&["Nigel Rees".to_string(), "Evelyn Waugh".to_string()]))
    );
    assert_eq!(
        outputs.get(OUT_JSON),
        Some(PortValue::List(&[
            "\"Nigel Rees\"".to_string(),
            "\"Evelyn Waugh\"".to_string()
        ]))
    );
}

#[test]
fn test_no_match_produces_placeholder() {
    init_logging();
    let activity = configured("$.b");
    let outputs = activity
        .execute(&ActivityInputs::from_json_text(r#"{"a": 1}"#))
        .expect("a missing member is not an error");

    assert_eq!(outputs.first_node(), &NodeValue::NoValueProduced);
    assert_eq!(outputs.first_node().to_string(), "No value produced");
    assert!(outputs.node_list().is_empty());
    assert!(outputs.node_list_as_json().is_empty());
}

#[test]
fn test_null_match() {
    init_logging();
    let activity = configured("$.a");
    let outputs = activity
        .execute(&ActivityInputs::from_json_text(r#"{"a": null}"#))
        .expect("execution should succeed");

    assert_eq!(outputs.first_node(), &NodeValue::Value(String::new()));
    assert_eq!(outputs.first_node_as_json(), &NodeValue::Value("null".into()));
}

#[test]
fn test_empty_input() {
    init_logging();
    let activity = configured("$.a");

    let err = activity
        .execute(&ActivityInputs::from_json_text(""))
        .expect_err("empty input must be rejected");
    assert!(matches!(err, ActivityError::EmptyInput));
    assert_eq!(err.to_string(), "Empty input");

    let err = activity
        .execute(&ActivityInputs::new())
        .expect_err("absent input must be rejected");
    assert!(matches!(err, ActivityError::EmptyInput));
}

#[test]
fn test_invalid_document() {
    init_logging();
    let activity = configured("$.a");

    for text in ["{\"a\": ", "not json", "   "] {
        let err = activity
            .execute(&ActivityInputs::from_json_text(text))
            .expect_err("malformed input must be rejected");
        assert!(
            matches!(err, ActivityError::InvalidInputDocument(_)),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn test_scalar_document() {
    init_logging();
    let activity = configured("$");

    for text in ["42", "\"x\"", "true", "null"] {
        let err = activity
            .execute(&ActivityInputs::from_json_text(text))
            .expect_err("scalar documents are not containers");
        assert!(
            matches!(err, ActivityError::JsonPath(JsonPathError::NotAContainer { .. })),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn test_path_application_error() {
    init_logging();
    let activity = configured("$.a[0]");
    let err = activity
        .execute(&ActivityInputs::from_json_text(r#"{"a": {"b": 1}}"#))
        .expect_err("indexing an object is an error");
    assert!(matches!(
        err,
        ActivityError::JsonPath(JsonPathError::PathApplicationError { .. })
    ));
}

#[test]
fn test_rejected_configurations() {
    init_logging();
    let mut activity = JsonPathActivity::new();

    let err = activity
        .configure(JsonPathActivityConfig::new("   "))
        .expect_err("blank expression must be rejected");
    assert!(matches!(
        err,
        ActivityError::InvalidConfiguration(ConfigurationError::EmptyJsonPath)
    ));

    let err = activity
        .configure(JsonPathActivityConfig::new("$.a["))
        .expect_err("malformed expression must be rejected");
    assert!(matches!(
        err,
        ActivityError::InvalidConfiguration(ConfigurationError::InvalidJsonPath(_))
    ));

    assert!(activity.configuration().is_none());
}

#[test]
fn test_reconfigure_replaces_expression() {
    init_logging();
    let json = r#"{"a": 1, "b": 2}"#;
    let mut activity = configured("$.a");
    let first = activity
        .execute(&ActivityInputs::from_json_text(json))
        .expect("execution should succeed");
    assert_eq!(first.node_list(), ["1"]);

    activity
        .configure(JsonPathActivityConfig::new("$.b"))
        .expect("configuration should be accepted");
    let second = activity
        .execute(&ActivityInputs::from_json_text(json))
        .expect("execution should succeed");
    assert_eq!(second.node_list(), ["2"]);
}

#[test]
fn test_repeated_execution_is_stable() {
    init_logging();
    let activity = configured("$..price");
    let inputs = ActivityInputs::from_json_text(
        r#"{"store": {"book": [{"price": 8.95}, {"price": 12.99}], "bicycle": {"price": 19.95}}}"#,
    );
    let first = activity.execute(&inputs).expect("execution should succeed");
    let second = activity.execute(&inputs).expect("execution should succeed");
    assert_eq!(first, second);
    assert_eq!(first.node_list(), ["8.95", "12.99", "19.95"]);
}

#[test]
fn test_custom_context() {
    init_logging();
    let mut activity = JsonPathActivity::with_context(EvaluationContext::new().with_null_text("-"));
    activity
        .configure(JsonPathActivityConfig::new("$[*]"))
        .expect("configuration should be accepted");

    let mut inputs = ActivityInputs::new();
    inputs.insert(IN_JSON, "[null, 1]");
    let outputs = activity.execute(&inputs).expect("execution should succeed");
    assert_eq!(outputs.node_list(), ["-", "1"]);
    assert_eq!(outputs.node_list_as_json(), ["null", "1"]);
}

#[test]
fn test_configuration_serde_names() {
    let config = JsonPathActivityConfig::new("$.a").with_json_text("{\"a\": 1}");
    let value = serde_json::to_value(&config).expect("config should serialize");
    assert_eq!(value["jsonPathAsString"], "$.a");
    assert_eq!(value["jsonText"], "{\"a\": 1}");

    let parsed: JsonPathActivityConfig =
        serde_json::from_str(r#"{"jsonPathAsString": "$.b"}"#).expect("config should parse");
    assert_eq!(parsed, JsonPathActivityConfig::new("$.b"));
}
