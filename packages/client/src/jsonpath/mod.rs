//! `JSONPath` compilation and evaluation
//!
//! The pipeline runs in three steps:
//!
//! - [`JsonPathParser::compile`] turns expression text into an immutable
//!   token chain
//! - [`evaluate`] walks the chain over a parsed document and reports the
//!   matches together with the array-mode flag
//! - [`normalize`] renders the matches as text and JSON outputs
//!
//! # Examples
//!
//! ```rust
//! use jsonpath_activity_core::jsonpath::{JsonPathParser, NodeValue, NormalizerOptions, evaluate, normalize};
//! use serde_json::json;
//!
//! let path = JsonPathParser::compile("$.store.book[*].author").expect("valid path");
//! let doc = json!({"store": {"book": [{"author": "Nigel Rees"}, {"author": "Evelyn Waugh"}]}});
//!
//! let result = evaluate(&path, &doc).expect("document is a container");
//! assert!(result.array_mode());
//!
//! let outputs = normalize(result, &NormalizerOptions::default());
//! assert_eq!(outputs.first_value_as_text, NodeValue::Value("Nigel Rees".into()));
//! assert_eq!(outputs.all_values_as_text, vec!["Nigel Rees", "Evelyn Waugh"]);
//! ```

pub mod context;
pub mod core_evaluator;
pub mod error;
pub mod filter;
pub mod normalizer;

// Decomposed parser modules
pub mod ast;
pub mod compiler;
pub mod expression;
pub mod filter_parser;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;

pub use self::{
    ast::{
        ArraySelector, ComparisonOp, FilterExpression, FilterValue, LogicalOp, PathToken,
        PredicateToken, PropertyOrigin, PropertyStep,
    },
    compiler::{CompileOptions, JsonPathParser, ValidationStatus},
    context::EvaluationContext,
    core_evaluator::{
        ContextFilters, CoreJsonPathEvaluator, EvaluationResult, evaluate, evaluate_with_filters,
    },
    error::{JsonPathError, JsonPathResult},
    expression::{CompiledPath, JsonPathExpression},
    filter::{FilterEvaluator, Predicate},
    normalizer::{
        NO_VALUE_PRODUCED, NodeValue, NormalizedOutputs, NormalizerOptions, normalize,
    },
};
