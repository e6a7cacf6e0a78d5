//! Core selector parser structure and main parsing logic
//!
//! Contains the main `SelectorParser` struct and the primary `parse_segment` method
//! that dispatches to specialized parsing functions based on token type.

use crate::jsonpath::{
    ast::PathToken,
    compiler::CompileOptions,
    error::{JsonPathResult, invalid_expression_error},
    tokens::{Token, TokenMatcher, TokenStream},
};

/// Parser for individual `JSONPath` segments
pub struct SelectorParser<'a> {
    pub(super) tokens: &'a mut TokenStream,
    pub(super) input: &'a str,
    pub(super) options: CompileOptions,
}

impl<'a> SelectorParser<'a> {
    /// Create new selector parser
    #[inline]
    pub fn new(tokens: &'a mut TokenStream, input: &'a str) -> Self {
        Self {
            tokens,
            input,
            options: CompileOptions::default(),
        }
    }

    /// Use the given compile options for nested predicate parsing
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse one segment of the path into one or two path tokens
    ///
    /// A `..` segment yields the recursive descent token followed by the step
    /// it applies to (`$..name`, `$..*`, `$..[0]`).
    pub fn parse_segment(&mut self, is_first: bool) -> JsonPathResult<Vec<PathToken>> {
        let position = self.position();
        match self.peek_token() {
            Some(Token::Root) if is_first => {
                self.consume_token();
                Ok(vec![PathToken::Root])
            }
            Some(Token::Root) => Err(invalid_expression_error(
                self.input,
                "root identifier '$' may only start a path",
                Some(position),
            )),
            _ if is_first => Err(invalid_expression_error(
                self.input,
                "JSONPath expressions must start with '$'",
                Some(position),
            )),
            Some(Token::Dot) => {
                self.consume_token();
                Ok(vec![super::dot::parse_dot_selector(self)?])
            }
            Some(Token::DoubleDot) => {
                self.consume_token();
                let step = super::dot::parse_descendant_step(self)?;
                Ok(vec![PathToken::RecursiveDescent, step])
            }
            Some(Token::LeftBracket) => {
                self.consume_token();
                Ok(vec![super::bracket::parse_bracket_selector(self)?])
            }
            Some(Token::At) => Err(invalid_expression_error(
                self.input,
                "current node identifier '@' is only valid within filter expressions [?...]",
                Some(position),
            )),
            Some(token) => Err(invalid_expression_error(
                self.input,
                format!(
                    "expected selector (.property, ..property or [expression]), found '{}'",
                    token.as_debug_str()
                ),
                Some(position),
            )),
            None => Err(invalid_expression_error(
                self.input,
                "unexpected end of input",
                Some(position),
            )),
        }
    }

    /// Peek at next token without consuming
    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Consume and return next token
    #[inline]
    pub(super) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.consume()
    }

    /// Character offset of the next token
    #[inline]
    pub(super) fn position(&self) -> usize {
        self.tokens.offset()
    }

    /// Expect specific token and consume it
    pub(super) fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        let position = self.position();
        match self.consume_token() {
            Some(actual) if TokenMatcher::tokens_match(&actual, &expected) => Ok(()),
            Some(actual) => Err(invalid_expression_error(
                self.input,
                format!(
                    "expected '{}', found '{}'",
                    expected.as_debug_str(),
                    actual.as_debug_str()
                ),
                Some(position),
            )),
            None => Err(invalid_expression_error(
                self.input,
                format!("expected '{}', found end of input", expected.as_debug_str()),
                Some(position),
            )),
        }
    }
}
