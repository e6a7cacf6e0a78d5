//! JSONPath selector parsing implementation
//!
//! Decomposed selector parser for individual JSONPath segments including
//! array indices, slices, predicates, property access, and unions.

pub mod bracket;
pub mod core;
pub mod dot;
pub mod slice;

// Re-export main parser
pub use core::SelectorParser;
