//! JSONPath activity core prelude
//!
//! The types a host needs to compile, evaluate and render paths.

// Compilation
pub use crate::jsonpath::{CompileOptions, CompiledPath, JsonPathParser, ValidationStatus};

// Evaluation
pub use crate::jsonpath::{
    ContextFilters, CoreJsonPathEvaluator, EvaluationResult, Predicate, evaluate,
    evaluate_with_filters,
};

// Rendering
pub use crate::jsonpath::{NodeValue, NormalizedOutputs, NormalizerOptions, normalize};

// Context and errors
pub use crate::jsonpath::{EvaluationContext, JsonPathError, JsonPathResult};
