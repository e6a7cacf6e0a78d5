//! Dot notation selector parsing
//!
//! Handles parsing of dot-notation selectors (.property, .*) and of the step
//! that follows a recursive descent (..property, ..*, ..[...]).

use super::core::SelectorParser;
use crate::jsonpath::{
    ast::PathToken,
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse dot-notation selector (.property or .*)
pub fn parse_dot_selector(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    let position = parser.position();
    if matches!(parser.peek_token(), Some(Token::Star)) {
        parser.consume_token();
        return Ok(PathToken::Wildcard);
    }
    if let Some(name) = take_member_name(parser) {
        return Ok(PathToken::Child { names: vec![name] });
    }

    match parser.peek_token() {
        Some(Token::At) => Err(invalid_expression_error(
            parser.input,
            "current node identifier '@' is only valid within filter expressions [?...]",
            Some(position),
        )),
        Some(Token::EOF) | None => Err(invalid_expression_error(
            parser.input,
            "incomplete property access (ends with '.')",
            Some(position.saturating_sub(1)),
        )),
        _ => Err(invalid_expression_error(
            parser.input,
            "expected property name or '*' (wildcard) after '.'",
            Some(position),
        )),
    }
}

/// Parse the step after `..`: a member name, `*` or a bracket selector
pub fn parse_descendant_step(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    let position = parser.position();
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            Ok(PathToken::Wildcard)
        }
        Some(Token::LeftBracket) => {
            parser.consume_token();
            super::bracket::parse_bracket_selector(parser)
        }
        _ => match take_member_name(parser) {
            Some(name) => Ok(PathToken::Child { names: vec![name] }),
            None => Err(invalid_expression_error(
                parser.input,
                "descendant segment '..' must be followed by a name, '*' or a bracket selector",
                Some(position),
            )),
        },
    }
}

/// Consume a member name; keywords are plain names in this position
fn take_member_name(parser: &mut SelectorParser) -> Option<String> {
    let name = match parser.peek_token()? {
        Token::Identifier(name) => name.clone(),
        Token::True => "true".to_string(),
        Token::False => "false".to_string(),
        Token::Null => "null".to_string(),
        _ => return None,
    };
    parser.consume_token();
    Some(name)
}
