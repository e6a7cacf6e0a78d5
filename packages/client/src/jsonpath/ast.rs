//! `JSONPath` Abstract Syntax Tree (AST) definitions
//!
//! Compiled path tokens and the predicate expression tree they carry. Every
//! token is a closed variant with its own parameters; the evaluator applies
//! them by pattern matching.

use std::fmt;

use regex::Regex;

/// One compiled step of a `JSONPath` expression
#[derive(Debug, Clone)]
pub enum PathToken {
    /// Root selector ($)
    Root,

    /// Child property access (.name, ['name'] or ['a','b'])
    Child {
        /// Property names, more than one fans out
        names: Vec<String>,
    },

    /// Wildcard selector ([*] or .*)
    Wildcard,

    /// Recursive descent (..)
    RecursiveDescent,

    /// Array index, index union or slice
    IndexOrSlice(ArraySelector),

    /// Predicate filter ([?(...)] or the [?] placeholder)
    Predicate(PredicateToken),
}

impl PathToken {
    /// Whether applying this token can produce more than one match
    #[inline]
    #[must_use]
    pub fn is_array_filter(&self) -> bool {
        match self {
            PathToken::Root => false,
            PathToken::Child { names } => names.len() > 1,
            PathToken::IndexOrSlice(selector) => selector.is_array_filter(),
            PathToken::Wildcard | PathToken::RecursiveDescent | PathToken::Predicate(_) => true,
        }
    }

    /// Textual form of the token, used in diagnostics
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::Root => write!(f, "$"),
            PathToken::Child { names } => {
                let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
                write!(f, "[{}]", quoted.join(","))
            }
            PathToken::Wildcard => write!(f, "[*]"),
            PathToken::RecursiveDescent => write!(f, ".."),
            PathToken::IndexOrSlice(selector) => write!(f, "{selector}"),
            PathToken::Predicate(PredicateToken::Inline { source, .. }) => {
                write!(f, "[?{source}]")
            }
            PathToken::Predicate(PredicateToken::Placeholder) => write!(f, "[?]"),
        }
    }
}

/// Array access forms inside brackets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArraySelector {
    /// Single index ([0], [-1]); negative indices count from the end
    Index(i64),

    /// Several indexes ([0,2,-1]), matched in the order written
    Union(Vec<i64>),

    /// Slice ([start:end:step]); missing bounds default by step direction
    Slice {
        /// Start index for slice (None means from the first element in step direction)
        start: Option<i64>,
        /// End index for slice (None means through the last element in step direction)
        end: Option<i64>,
        /// Step size for slice, never zero
        step: i64,
    },
}

impl ArraySelector {
    /// Slices and unions fan out, a single index does not
    #[inline]
    #[must_use]
    pub fn is_array_filter(&self) -> bool {
        !matches!(self, ArraySelector::Index(_))
    }
}

impl fmt::Display for ArraySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArraySelector::Index(index) => write!(f, "[{index}]"),
            ArraySelector::Union(indexes) => {
                let parts: Vec<String> = indexes.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(","))
            }
            ArraySelector::Slice { start, end, step } => {
                let bound = |b: &Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
                if *step == 1 {
                    write!(f, "[{}:{}]", bound(start), bound(end))
                } else {
                    write!(f, "[{}:{}:{step}]", bound(start), bound(end))
                }
            }
        }
    }
}

/// Predicate token payload
#[derive(Debug, Clone)]
pub enum PredicateToken {
    /// Inline predicate parsed at compile time
    Inline {
        /// Predicate text as written between `[?` and `]`
        source: String,
        /// Parsed predicate
        expression: FilterExpression,
    },

    /// `[?]`, bound at evaluation time to the next caller-supplied predicate
    Placeholder,
}

/// Filter expression AST for `JSONPath` predicates
#[derive(Debug, Clone)]
pub enum FilterExpression {
    /// Current node reference (@)
    Current,

    /// Property access relative to @ or $ (@.a.b, @['a'][0], $.limit)
    Property {
        /// Node the path starts from
        origin: PropertyOrigin,
        /// Property path components
        path: Vec<PropertyStep>,
    },

    /// Literal values (strings, numbers, booleans, null)
    Literal {
        /// The literal value
        value: FilterValue,
    },

    /// Comparison operations
    Comparison {
        /// Left operand of comparison
        left: Box<FilterExpression>,
        /// Comparison operator
        operator: ComparisonOp,
        /// Right operand of comparison
        right: Box<FilterExpression>,
    },

    /// Logical operations (&&, ||)
    Logical {
        /// Left operand of logical operation
        left: Box<FilterExpression>,
        /// Logical operator
        operator: LogicalOp,
        /// Right operand of logical operation
        right: Box<FilterExpression>,
    },

    /// Logical negation (!)
    Not {
        /// Negated operand
        operand: Box<FilterExpression>,
    },

    /// Regular expression matching (=~ /pattern/flags)
    Regex {
        /// Target expression to match against
        target: Box<FilterExpression>,
        /// Compiled regular expression
        regex: Regex,
    },
}

/// Where a predicate property path starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyOrigin {
    /// The node under test (@)
    Current,
    /// The document root ($)
    Root,
}

/// One step of a predicate property path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyStep {
    /// Object member by name
    Name(String),
    /// Array element by index, negative counts from the end
    Index(i64),
}

/// Filter expression literal values
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String literal value
    String(String),
    /// Floating-point number literal value
    Number(f64),
    /// Integer literal value
    Integer(i64),
    /// Boolean literal value
    Boolean(bool),
    /// Null literal value
    Null,
    /// Array or object resolved from the document
    Json(serde_json::Value),
    /// Missing property (different from null)
    Missing,
}

/// Comparison operators for filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equality comparison (==)
    Equal,
    /// Inequality comparison (!=)
    NotEqual,
    /// Less than comparison (<)
    Less,
    /// Less than or equal comparison (<=)
    LessEq,
    /// Greater than comparison (>)
    Greater,
    /// Greater than or equal comparison (>=)
    GreaterEq,
}

/// Logical operators for filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Logical AND operator (&&)
    And,
    /// Logical OR operator (||)
    Or,
}

impl FilterExpression {
    /// Whether the expression reads from the document root
    #[must_use]
    pub fn references_root(&self) -> bool {
        match self {
            FilterExpression::Property { origin, .. } => *origin == PropertyOrigin::Root,
            FilterExpression::Comparison { left, right, .. }
            | FilterExpression::Logical { left, right, .. } => {
                left.references_root() || right.references_root()
            }
            FilterExpression::Not { operand } => operand.references_root(),
            FilterExpression::Regex { target, .. } => target.references_root(),
            FilterExpression::Current | FilterExpression::Literal { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_filter_flags() {
        assert!(!PathToken::Root.is_array_filter());
        assert!(
            !PathToken::Child {
                names: vec!["a".into()]
            }
            .is_array_filter()
        );
        assert!(
            PathToken::Child {
                names: vec!["a".into(), "b".into()]
            }
            .is_array_filter()
        );
        assert!(!PathToken::IndexOrSlice(ArraySelector::Index(0)).is_array_filter());
        assert!(
            PathToken::IndexOrSlice(ArraySelector::Slice {
                start: None,
                end: Some(2),
                step: 1
            })
            .is_array_filter()
        );
        assert!(PathToken::IndexOrSlice(ArraySelector::Union(vec![0, 1])).is_array_filter());
        assert!(PathToken::Wildcard.is_array_filter());
        assert!(PathToken::RecursiveDescent.is_array_filter());
        assert!(PathToken::Predicate(PredicateToken::Placeholder).is_array_filter());
    }

    #[test]
    fn test_token_descriptions() {
        assert_eq!(
            PathToken::Child {
                names: vec!["a".into(), "b".into()]
            }
            .description(),
            "['a','b']"
        );
        assert_eq!(
            PathToken::IndexOrSlice(ArraySelector::Slice {
                start: Some(1),
                end: None,
                step: 2
            })
            .description(),
            "[1::2]"
        );
        assert_eq!(PathToken::IndexOrSlice(ArraySelector::Index(-1)).description(), "[-1]");
    }

    #[test]
    fn test_references_root() {
        let current = FilterExpression::Property {
            origin: PropertyOrigin::Current,
            path: vec![PropertyStep::Name("price".into())],
        };
        let root = FilterExpression::Property {
            origin: PropertyOrigin::Root,
            path: vec![PropertyStep::Name("limit".into())],
        };
        assert!(!current.references_root());
        let comparison = FilterExpression::Comparison {
            left: Box::new(current),
            operator: ComparisonOp::Less,
            right: Box::new(root),
        };
        assert!(comparison.references_root());
        assert!(
            FilterExpression::Not {
                operand: Box::new(comparison)
            }
            .references_root()
        );
    }
}
