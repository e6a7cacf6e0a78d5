//! Core filter parser structure and initialization
//!
//! Contains the main `FilterParser` struct and the entry points for parsing
//! predicates embedded in a path or supplied on their own.

use crate::jsonpath::{
    ast::{ComparisonOp, FilterExpression},
    compiler::CompileOptions,
    error::{JsonPathResult, empty_expression_error, invalid_expression_error},
    tokenizer::ExpressionParser,
    tokens::{Token, TokenMatcher, TokenStream},
};

/// Parser for `JSONPath` filter expressions
pub struct FilterParser<'a> {
    pub(super) tokens: &'a mut TokenStream,
    pub(super) input: &'a str,
    pub(super) options: CompileOptions,
}

impl<'a> FilterParser<'a> {
    /// Create new filter parser
    #[inline]
    pub fn new(tokens: &'a mut TokenStream, input: &'a str) -> Self {
        Self {
            tokens,
            input,
            options: CompileOptions::default(),
        }
    }

    /// Use the given options, e.g. a regex size limit
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a predicate given on its own, e.g. `@.category == 'fiction'`
    ///
    /// Used for predicates bound to `[?]` placeholders at evaluation time.
    pub fn parse_standalone(
        text: &str,
        options: CompileOptions,
    ) -> JsonPathResult<FilterExpression> {
        let text = text.trim();
        if text.is_empty() {
            return Err(empty_expression_error());
        }

        let mut expression_parser = ExpressionParser::new(text);
        expression_parser.tokenize()?;

        let mut parser =
            FilterParser::new(&mut expression_parser.tokens, text).with_options(options);
        let expression = parser.parse_filter_expression()?;
        parser.expect_token(Token::EOF)?;
        Ok(expression)
    }

    /// Parse complete filter expression
    #[inline]
    pub fn parse_filter_expression(&mut self) -> JsonPathResult<FilterExpression> {
        self.parse_logical_or()
    }

    /// Parse comparison operator from tokens
    #[inline]
    pub fn parse_comparison_operator(&mut self) -> Option<ComparisonOp> {
        let operator = match self.peek_token()? {
            Token::Equal => ComparisonOp::Equal,
            Token::NotEqual => ComparisonOp::NotEqual,
            Token::Less => ComparisonOp::Less,
            Token::LessEq => ComparisonOp::LessEq,
            Token::Greater => ComparisonOp::Greater,
            Token::GreaterEq => ComparisonOp::GreaterEq,
            _ => return None,
        };
        self.consume_token();
        Some(operator)
    }

    /// Expect a specific token and consume it
    #[inline]
    pub fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        let position = self.position();
        match self.consume_token() {
            Some(token) if TokenMatcher::tokens_match(&token, &expected) => Ok(()),
            Some(token) => Err(invalid_expression_error(
                self.input,
                format!(
                    "expected '{}', found '{}'",
                    expected.as_debug_str(),
                    token.as_debug_str()
                ),
                Some(position),
            )),
            None => Err(invalid_expression_error(
                self.input,
                format!("expected '{}', but reached end of input", expected.as_debug_str()),
                Some(position),
            )),
        }
    }

    /// Consume the next token from the token stream
    #[inline]
    pub fn consume_token(&mut self) -> Option<Token> {
        self.tokens.consume()
    }

    /// Peek at the next token without consuming it
    #[inline]
    #[must_use]
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Character offset of the next token
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.tokens.offset()
    }
}
