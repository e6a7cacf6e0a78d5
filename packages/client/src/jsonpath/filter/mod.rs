//! `JSONPath` Filter Expression Evaluation
//!
//! Handles evaluation of predicate expressions including:
//! - Property access relative to the current node or the root (@.a.b, $.limit)
//! - Comparisons (==, !=, <, <=, >, >=)
//! - Regex matches (=~ /pattern/flags)
//! - Logical operations (&&, ||, !)

mod comparisons;
mod core;
mod predicate;
mod property;
mod utils;

pub use core::FilterEvaluator;

pub use comparisons::ValueComparator;
pub use predicate::Predicate;
pub use property::PropertyResolver;
pub use utils::FilterUtils;

/// Tracing target for the predicate trace
pub(crate) const TRACE_TARGET: &str = "jsonpath_activity_core::filter";
