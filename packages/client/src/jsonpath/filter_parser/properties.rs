//! Property access parsing for JSONPath filter expressions
//!
//! Handles parsing of property access patterns after the current node (@) or
//! the root ($): dotted chains, quoted member names and array indexes.

use super::core::FilterParser;
use crate::jsonpath::{
    ast::{FilterExpression, PropertyOrigin, PropertyStep},
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

impl FilterParser<'_> {
    /// Parse property access after an @ or $ token
    pub(super) fn parse_property_access(
        &mut self,
        origin: PropertyOrigin,
    ) -> JsonPathResult<FilterExpression> {
        let mut path = Vec::new();

        loop {
            let position = self.position();
            match self.peek_token() {
                Some(Token::Dot) => {
                    self.consume_token();
                    path.push(PropertyStep::Name(self.parse_member_name()?));
                }
                Some(Token::LeftBracket) => {
                    self.consume_token();
                    let step = match self.consume_token() {
                        Some(Token::String(name)) => PropertyStep::Name(name),
                        Some(Token::Integer(index)) => PropertyStep::Index(index),
                        _ => {
                            return Err(invalid_expression_error(
                                self.input,
                                "expected quoted name or integer index inside predicate brackets",
                                Some(position + 1),
                            ));
                        }
                    };
                    self.expect_token(Token::RightBracket)?;
                    path.push(step);
                }
                Some(Token::DoubleDot | Token::Star) => {
                    return Err(invalid_expression_error(
                        self.input,
                        "recursive descent and wildcards are not supported inside predicates",
                        Some(position),
                    ));
                }
                _ => break,
            }
        }

        if path.is_empty() && origin == PropertyOrigin::Current {
            return Ok(FilterExpression::Current);
        }

        Ok(FilterExpression::Property { origin, path })
    }

    /// Parse the name after a '.' inside a predicate path
    fn parse_member_name(&mut self) -> JsonPathResult<String> {
        let position = self.position();
        let name = match self.peek_token() {
            Some(Token::Identifier(name)) => name.clone(),
            Some(Token::True) => "true".to_string(),
            Some(Token::False) => "false".to_string(),
            Some(Token::Null) => "null".to_string(),
            _ => {
                return Err(invalid_expression_error(
                    self.input,
                    "expected property name after '.'",
                    Some(position),
                ));
            }
        };
        self.consume_token();
        Ok(name)
    }
}
