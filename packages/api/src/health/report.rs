//! Visit reports and their status levels

use std::fmt;

use serde::Serialize;

/// Severity of a report, ordered from harmless to blocking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    Ok,
    Warning,
    Severe,
}

/// What a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HealthCheckCode {
    /// Summary report grouping the individual findings
    NoProblem,
    CorrectlyConfigured,
    EmptyJsonPathExpression,
    InvalidJsonPathExpression,
    GeneralConfigProblem,
    NoExampleDocument,
}

impl HealthCheckCode {
    /// Longer description of the finding for the editor
    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            HealthCheckCode::NoProblem | HealthCheckCode::CorrectlyConfigured => "No problem found",
            HealthCheckCode::EmptyJsonPathExpression => {
                "JsonPath expression that this activity would apply to the JSON document at its input is not set"
            }
            HealthCheckCode::InvalidJsonPathExpression => {
                "JsonPath expression that this activity would apply to the JSON document at its input is invalid or ill-formed"
            }
            HealthCheckCode::GeneralConfigProblem => {
                "Configuration of this JsonPath activity is not valid"
            }
            HealthCheckCode::NoExampleDocument => {
                "Current configuration of this JsonPath activity does not contain an example JSON document. \
                 The JsonPath expression was entered by hand, so semantic mistakes are easy to miss."
            }
        }
    }

    /// Suggested fix
    #[must_use]
    pub fn solution(self) -> &'static str {
        match self {
            HealthCheckCode::NoProblem | HealthCheckCode::CorrectlyConfigured => {
                "No change necessary"
            }
            HealthCheckCode::EmptyJsonPathExpression => {
                "Enter the JsonPath expression manually or paste an example JSON document and select the desired element"
            }
            HealthCheckCode::InvalidJsonPathExpression => {
                "Please check correctness of the JsonPath expression"
            }
            HealthCheckCode::GeneralConfigProblem => {
                "Please check configuration of the JsonPath activity"
            }
            HealthCheckCode::NoExampleDocument => {
                "An example JSON document can be added to the activity configuration"
            }
        }
    }
}

/// Outcome of visiting one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitReport {
    message: String,
    code: HealthCheckCode,
    status: Status,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sub_reports: Vec<VisitReport>,
}

impl VisitReport {
    /// Report on a single finding
    #[must_use]
    pub fn new(message: impl Into<String>, code: HealthCheckCode, status: Status) -> Self {
        Self {
            message: message.into(),
            code,
            status,
            sub_reports: Vec::new(),
        }
    }

    /// Summary report whose status is the worst of `sub_reports`
    #[must_use]
    pub fn with_sub_reports(
        message: impl Into<String>,
        code: HealthCheckCode,
        sub_reports: Vec<VisitReport>,
    ) -> Self {
        Self {
            message: message.into(),
            code,
            status: Self::worst_status(&sub_reports),
            sub_reports,
        }
    }

    /// Worst status among `reports`, `Ok` when there are none
    #[must_use]
    pub fn worst_status(reports: &[VisitReport]) -> Status {
        reports
            .iter()
            .map(VisitReport::status)
            .max()
            .unwrap_or(Status::Ok)
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> HealthCheckCode {
        self.code
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn sub_reports(&self) -> &[VisitReport] {
        &self.sub_reports
    }
}

impl fmt::Display for VisitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.status, self.message)
    }
}
