//! The JSONPath activity: configuration bean, ports and execution

pub mod config;
pub mod error;
pub mod execution;
pub mod ports;

pub use config::{ConfigResult, ConfigurationError, JsonPathActivityConfig, Validator};
pub use error::ActivityError;
pub use execution::{ActivityInputs, ActivityOutputs, JsonPathActivity, PortValue};
pub use ports::{
    IN_JSON, OUT_JSON, OUT_TEXT, PortDefinition, PortDirection, SINGLE_VALUE_JSON,
    SINGLE_VALUE_TEXT, ports,
};
