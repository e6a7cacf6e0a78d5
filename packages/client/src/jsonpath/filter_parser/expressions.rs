//! Expression parsing logic for filter expressions
//!
//! Contains parsing logic for logical operators, negation, comparisons,
//! regex matches and primary expressions.

use regex::RegexBuilder;

use super::core::FilterParser;
use crate::jsonpath::{
    ast::{FilterExpression, FilterValue, LogicalOp, PropertyOrigin},
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

impl FilterParser<'_> {
    /// Parse logical OR expressions (lowest precedence)
    pub(super) fn parse_logical_or(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_logical_and()?;

        while matches!(self.peek_token(), Some(Token::LogicalOr)) {
            self.consume_token();
            let right = self.parse_logical_and()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::Or,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse logical AND expressions
    pub(super) fn parse_logical_and(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_unary()?;

        while matches!(self.peek_token(), Some(Token::LogicalAnd)) {
            self.consume_token();
            let right = self.parse_unary()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::And,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse `!` negation
    pub(super) fn parse_unary(&mut self) -> JsonPathResult<FilterExpression> {
        if matches!(self.peek_token(), Some(Token::Not)) {
            self.consume_token();
            let operand = self.parse_unary()?;
            return Ok(FilterExpression::Not {
                operand: Box::new(operand),
            });
        }
        self.parse_comparison()
    }

    /// Parse comparison and regex match expressions
    pub(super) fn parse_comparison(&mut self) -> JsonPathResult<FilterExpression> {
        let left = self.parse_primary()?;

        if matches!(self.peek_token(), Some(Token::Match)) {
            self.consume_token();
            return self.parse_regex_match(left);
        }

        match self.parse_comparison_operator() {
            Some(operator) => {
                let right = self.parse_primary()?;
                Ok(FilterExpression::Comparison {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                })
            }
            None => Ok(left),
        }
    }

    /// Parse the regex literal on the right of `=~`
    fn parse_regex_match(&mut self, target: FilterExpression) -> JsonPathResult<FilterExpression> {
        let position = self.position();
        let Some(Token::Regex { pattern, flags }) = self.consume_token() else {
            return Err(invalid_expression_error(
                self.input,
                "expected /pattern/ after '=~'",
                Some(position),
            ));
        };

        let mut builder = RegexBuilder::new(&pattern);
        builder
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .ignore_whitespace(flags.contains('x'));
        if let Some(limit) = self.options.regex_size_limit {
            builder.size_limit(limit);
        }
        let regex = builder
            .build()
            .map_err(|e| {
                invalid_expression_error(self.input, format!("invalid regex: {e}"), Some(position))
            })?;

        Ok(FilterExpression::Regex {
            target: Box::new(target),
            regex,
        })
    }

    /// Parse primary expressions (property access, literals, parentheses)
    pub(super) fn parse_primary(&mut self) -> JsonPathResult<FilterExpression> {
        let position = self.position();
        let literal = match self.peek_token() {
            Some(Token::At) => {
                self.consume_token();
                return self.parse_property_access(PropertyOrigin::Current);
            }
            Some(Token::Root) => {
                self.consume_token();
                return self.parse_property_access(PropertyOrigin::Root);
            }
            Some(Token::LeftParen) => {
                self.consume_token();
                let expr = self.parse_logical_or()?;
                self.expect_token(Token::RightParen)?;
                return Ok(expr);
            }
            Some(Token::String(s)) => FilterValue::String(s.clone()),
            Some(Token::Integer(n)) => FilterValue::Integer(*n),
            Some(Token::Number(n)) => FilterValue::Number(*n),
            Some(Token::True) => FilterValue::Boolean(true),
            Some(Token::False) => FilterValue::Boolean(false),
            Some(Token::Null) => FilterValue::Null,
            Some(Token::Identifier(name)) => {
                return Err(invalid_expression_error(
                    self.input,
                    format!("unexpected identifier '{name}', property access needs '@.' or '$.'"),
                    Some(position),
                ));
            }
            _ => {
                return Err(invalid_expression_error(
                    self.input,
                    "expected property access, literal, or parenthesized expression",
                    Some(position),
                ));
            }
        };

        self.consume_token();
        Ok(FilterExpression::Literal { value: literal })
    }
}
