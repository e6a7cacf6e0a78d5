//! Core `JSONPath` evaluator module
//!
//! Applies a compiled token chain to a parsed document. The walk keeps a
//! cursor that is a single node, a missed lookup, or a node list once any
//! array filter has fanned out.

pub mod array_ops;
pub mod engine;
pub mod filters;
mod selectors;

pub use engine::{CoreJsonPathEvaluator, EvaluationResult, evaluate, evaluate_with_filters};
pub use filters::ContextFilters;
