//! Integration tests for the configuration health check

use jsonpath_activity::activity::{JsonPathActivity, JsonPathActivityConfig};
use jsonpath_activity::health::{
    HealthCheckCode, HealthChecker, JsonPathActivityHealthChecker, Status, VisitReport,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn visit(config: &JsonPathActivityConfig) -> VisitReport {
    JsonPathActivityHealthChecker::new().visit(config)
}

fn codes(report: &VisitReport) -> Vec<HealthCheckCode> {
    report.sub_reports().iter().map(VisitReport::code).collect()
}

#[test]
fn test_correct_configuration_with_example() {
    init_logging();
    let report = visit(&JsonPathActivityConfig::new("$.a").with_json_text("{\"a\": 1}"));

    assert_eq!(report.message(), "JsonPath Activity Report");
    assert_eq!(report.code(), HealthCheckCode::NoProblem);
    assert_eq!(report.status(), Status::Ok);
    assert_eq!(codes(&report), vec![HealthCheckCode::CorrectlyConfigured]);
    assert_eq!(
        report.sub_reports()[0].message(),
        "JsonPath Activity is configured correctly"
    );
}

#[test]
fn test_missing_example_is_a_warning() {
    init_logging();
    let report = visit(&JsonPathActivityConfig::new("$.a"));

    assert_eq!(report.status(), Status::Warning);
    assert_eq!(
        codes(&report),
        vec![
            HealthCheckCode::CorrectlyConfigured,
            HealthCheckCode::NoExampleDocument
        ]
    );
    assert_eq!(
        report.sub_reports()[1].message(),
        "JsonPath activity - no example JSON document"
    );

    let blank_example = visit(&JsonPathActivityConfig::new("$.a").with_json_text("  "));
    assert_eq!(blank_example.status(), Status::Warning);
}

#[test]
fn test_empty_expression_is_severe() {
    init_logging();
    let report = visit(&JsonPathActivityConfig::new("").with_json_text("{}"));

    assert_eq!(report.status(), Status::Severe);
    assert_eq!(codes(&report), vec![HealthCheckCode::EmptyJsonPathExpression]);
    assert_eq!(
        report.sub_reports()[0].message(),
        "JsonPath Activity - JsonPath expression is missing"
    );
}

#[test]
fn test_invalid_expression_is_severe() {
    init_logging();
    let report = visit(&JsonPathActivityConfig::new("$.a[").with_json_text("{}"));

    assert_eq!(report.status(), Status::Severe);
    assert_eq!(codes(&report), vec![HealthCheckCode::InvalidJsonPathExpression]);
    assert_eq!(
        report.sub_reports()[0].message(),
        "JsonPath Activity - JsonPath expression is invalid"
    );
}

#[test]
fn test_worst_status_wins() {
    init_logging();
    let report = visit(&JsonPathActivityConfig::new("$["));

    assert_eq!(report.status(), Status::Severe);
    assert_eq!(
        codes(&report),
        vec![
            HealthCheckCode::InvalidJsonPathExpression,
            HealthCheckCode::NoExampleDocument
        ]
    );
    assert_eq!(
        VisitReport::worst_status(report.sub_reports()),
        Status::Severe
    );
    assert_eq!(VisitReport::worst_status(&[]), Status::Ok);
}

#[test]
fn test_configured_activity() {
    init_logging();
    let mut activity = JsonPathActivity::new();
    activity
        .configure(JsonPathActivityConfig::new("$.a").with_json_text("{\"a\": 1}"))
        .expect("configuration should be accepted");

    let report = JsonPathActivityHealthChecker::new().visit(&activity);
    assert_eq!(report.status(), Status::Ok);
    assert_eq!(codes(&report), vec![HealthCheckCode::CorrectlyConfigured]);
}

#[test]
fn test_unconfigured_activity() {
    init_logging();
    let activity = JsonPathActivity::new();

    let report = JsonPathActivityHealthChecker::new().visit(&activity);
    assert_eq!(report.status(), Status::Severe);
    assert_eq!(
        codes(&report),
        vec![
            HealthCheckCode::GeneralConfigProblem,
            HealthCheckCode::NoExampleDocument
        ]
    );
    assert_eq!(
        report.sub_reports()[0].message(),
        "JsonPath Activity - bad configuration"
    );
}

#[test]
fn test_checks_are_cheap() {
    let checker = JsonPathActivityHealthChecker::new();
    assert!(!HealthChecker::<JsonPathActivityConfig>::is_time_consuming(&checker));
    assert!(!HealthChecker::<JsonPathActivity>::is_time_consuming(&checker));
}

#[test]
fn test_codes_carry_guidance() {
    assert_eq!(HealthCheckCode::CorrectlyConfigured.solution(), "No change necessary");
    assert!(!HealthCheckCode::NoExampleDocument.explanation().is_empty());
    assert_eq!(
        HealthCheckCode::InvalidJsonPathExpression.solution(),
        "Please check correctness of the JsonPath expression"
    );
}
