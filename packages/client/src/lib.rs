//! # JSONPath activity core
//!
//! Compiles `JSONPath` expressions, applies them to parsed JSON documents
//! and renders the matches for a workflow activity with four outputs.
//!
//! ## Features
//!
//! - **Strict compiler** that rejects malformed expressions with a reason
//!   and a character position, never a partial path
//! - **Array-mode tracking** so callers know whether a path can fan out,
//!   independent of what the matches look like
//! - **Predicates** with comparisons, regex matches, `$` references and
//!   `[?]` placeholders bound to caller-supplied filters
//! - **Explicit engine context** instead of process-wide state
//!
//! ## Usage
//!
//! ```rust
//! use jsonpath_activity_core::{EvaluationContext, NodeValue};
//! use serde_json::json;
//!
//! let context = EvaluationContext::new();
//! let outputs = context
//!     .read("$.a.b", &json!({"a": {"b": 5}}))
//!     .expect("path matches a container document");
//!
//! assert_eq!(outputs.first_value_as_text, NodeValue::Value("5".into()));
//! assert_eq!(outputs.all_values_as_json, vec!["5"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod jsonpath;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
