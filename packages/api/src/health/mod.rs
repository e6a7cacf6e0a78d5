//! Configuration health checks for the JSONPath activity
//!
//! A check only inspects the configuration bean, so it is cheap enough to
//! run on every edit.

mod checker;
mod report;

pub use checker::{HealthChecker, JsonPathActivityHealthChecker};
pub use report::{HealthCheckCode, Status, VisitReport};
