//! Call-scoped context filter stack
//!
//! Holds the predicates a caller seeds for `[?]` placeholders, handed out in
//! order, and the source text of every predicate applied so far in the
//! current evaluation.

use std::collections::VecDeque;

use crate::jsonpath::{
    ast::PathToken,
    error::{JsonPathResult, path_application_error},
    filter::Predicate,
};

/// Predicates available to, and applied during, one evaluation
#[derive(Debug, Clone, Default)]
pub struct ContextFilters {
    pending: VecDeque<Predicate>,
    applied: Vec<String>,
}

impl ContextFilters {
    /// Empty stack, enough for paths without `[?]` placeholders
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack seeded with predicates for the placeholders, in path order
    #[must_use]
    pub fn with_predicates(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        predicates.into_iter().collect()
    }

    /// Queue one more predicate behind the existing ones
    #[inline]
    pub fn push(&mut self, predicate: Predicate) {
        self.pending.push_back(predicate);
    }

    /// Predicates not yet bound to a placeholder
    #[inline]
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Source text of the predicates applied so far, outermost first
    #[inline]
    #[must_use]
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Bind the next caller predicate to a `[?]` placeholder
    pub(crate) fn bind_placeholder(&mut self, token: &PathToken) -> JsonPathResult<Predicate> {
        let predicate = self.pending.pop_front().ok_or_else(|| {
            path_application_error(
                token.description(),
                format!(
                    "no predicate supplied for placeholder ({} applied before it)",
                    self.applied.len()
                ),
            )
        })?;
        self.record_applied(predicate.source());
        Ok(predicate)
    }

    #[inline]
    pub(crate) fn record_applied(&mut self, source: &str) {
        self.applied.push(source.to_string());
    }
}

impl FromIterator<Predicate> for ContextFilters {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
            applied: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonpath::{ast::PredicateToken, error::JsonPathError};

    #[test]
    fn test_placeholders_bind_in_order() {
        let mut filters = ContextFilters::with_predicates([
            Predicate::parse("@.a").expect("should parse"),
            Predicate::parse("@.b").expect("should parse"),
        ]);
        let token = PathToken::Predicate(PredicateToken::Placeholder);

        let first = filters.bind_placeholder(&token).expect("first binding");
        assert_eq!(first.source(), "@.a");
        assert_eq!(filters.pending_len(), 1);

        let second = filters.bind_placeholder(&token).expect("second binding");
        assert_eq!(second.source(), "@.b");
        assert_eq!(filters.applied(), ["@.a".to_string(), "@.b".to_string()]);

        assert!(matches!(
            filters.bind_placeholder(&token),
            Err(JsonPathError::PathApplicationError { .. })
        ));
    }
}
