//! JSONPath workflow activity
//!
//! A workflow step that applies one configured `JSONPath` expression to the
//! JSON document on its input port and publishes the matches on four output
//! ports, plus the health check a workflow editor runs over its
//! configuration.
//!
//! ```rust
//! use jsonpath_activity::activity::{ActivityInputs, JsonPathActivity, JsonPathActivityConfig};
//! use jsonpath_activity::NodeValue;
//!
//! let mut activity = JsonPathActivity::new();
//! activity
//!     .configure(JsonPathActivityConfig::new("$.items[*]"))
//!     .expect("expression is valid");
//!
//! let outputs = activity
//!     .execute(&ActivityInputs::from_json_text(r#"{"items": [1, 2, 3]}"#))
//!     .expect("document is valid");
//!
//! assert_eq!(outputs.first_node(), &NodeValue::Value("1".into()));
//! assert_eq!(outputs.node_list(), ["1", "2", "3"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod activity;
pub mod health;

// Re-export the engine from the core package
pub use jsonpath_activity_core::jsonpath;
pub use jsonpath_activity_core::prelude::*;

pub use activity::{ActivityError, JsonPathActivity, JsonPathActivityConfig};
pub use health::{HealthChecker, JsonPathActivityHealthChecker, Status, VisitReport};
