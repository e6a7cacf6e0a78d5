//! Health checker for the JSONPath activity

use jsonpath_activity_core::jsonpath::ValidationStatus;

use super::report::{HealthCheckCode, Status, VisitReport};
use crate::activity::{JsonPathActivity, JsonPathActivityConfig};

const REPORT_TITLE: &str = "JsonPath Activity Report";

/// Inspects a subject and reports what is wrong with it
pub trait HealthChecker<S: ?Sized> {
    /// Check `subject`
    fn visit(&self, subject: &S) -> VisitReport;

    /// Whether a visit may take long enough to be run in the background
    fn is_time_consuming(&self) -> bool;
}

/// Checks the expression and the example document of an activity
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathActivityHealthChecker;

impl JsonPathActivityHealthChecker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn expression_report(configuration: &JsonPathActivityConfig) -> VisitReport {
        match JsonPathActivityConfig::validate_json_path(&configuration.json_path_as_string) {
            ValidationStatus::Valid => VisitReport::new(
                "JsonPath Activity is configured correctly",
                HealthCheckCode::CorrectlyConfigured,
                Status::Ok,
            ),
            ValidationStatus::Empty => VisitReport::new(
                "JsonPath Activity - JsonPath expression is missing",
                HealthCheckCode::EmptyJsonPathExpression,
                Status::Severe,
            ),
            ValidationStatus::Invalid => VisitReport::new(
                "JsonPath Activity - JsonPath expression is invalid",
                HealthCheckCode::InvalidJsonPathExpression,
                Status::Severe,
            ),
        }
    }

    fn example_document_report() -> VisitReport {
        VisitReport::new(
            "JsonPath activity - no example JSON document",
            HealthCheckCode::NoExampleDocument,
            Status::Warning,
        )
    }
}

impl HealthChecker<JsonPathActivityConfig> for JsonPathActivityHealthChecker {
    fn visit(&self, configuration: &JsonPathActivityConfig) -> VisitReport {
        let mut reports = vec![Self::expression_report(configuration)];
        if !configuration.has_example_document() {
            reports.push(Self::example_document_report());
        }

        let report = VisitReport::with_sub_reports(REPORT_TITLE, HealthCheckCode::NoProblem, reports);
        log::debug!(
            "health check of '{}' finished with status {:?}",
            configuration.json_path_as_string,
            report.status()
        );
        report
    }

    fn is_time_consuming(&self) -> bool {
        false
    }
}

impl HealthChecker<JsonPathActivity> for JsonPathActivityHealthChecker {
    /// An activity that was never configured gets a general configuration
    /// problem instead of the expression findings
    fn visit(&self, activity: &JsonPathActivity) -> VisitReport {
        match activity.configuration() {
            Some(configuration) => {
                <Self as HealthChecker<JsonPathActivityConfig>>::visit(self, configuration)
            }
            None => VisitReport::with_sub_reports(
                REPORT_TITLE,
                HealthCheckCode::NoProblem,
                vec![
                    VisitReport::new(
                        "JsonPath Activity - bad configuration",
                        HealthCheckCode::GeneralConfigProblem,
                        Status::Severe,
                    ),
                    Self::example_document_report(),
                ],
            ),
        }
    }

    fn is_time_consuming(&self) -> bool {
        false
    }
}
