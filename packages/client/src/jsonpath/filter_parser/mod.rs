//! Filter expression parsing for `JSONPath` predicates
//!
//! Handles parsing of predicate expressions including comparisons, regex
//! matches, logical operations, negation and property access patterns.

pub mod core;
pub mod expressions;
pub mod properties;

// Re-export the main FilterParser struct
pub use core::FilterParser;
