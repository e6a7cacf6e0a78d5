//! Slice and index parsing for array selectors
//!
//! Handles parsing of array index, index union and slice notation with
//! start, end, and step values.

use super::core::SelectorParser;
use crate::jsonpath::{
    ast::{ArraySelector, PathToken},
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse index or slice notation after initial integer
pub fn parse_index_or_slice(parser: &mut SelectorParser, start: i64) -> JsonPathResult<PathToken> {
    let position = parser.position();
    match parser.peek_token() {
        Some(Token::RightBracket) => {
            parser.consume_token();
            Ok(PathToken::IndexOrSlice(ArraySelector::Index(start)))
        }
        Some(Token::Colon) => parse_slice_from_start(parser, start),
        Some(Token::Comma) => parse_integer_union_selector(parser, start),
        _ => Err(invalid_expression_error(
            parser.input,
            "expected ']', ':', or ',' after index",
            Some(position),
        )),
    }
}

/// Parse union selector starting with integer
fn parse_integer_union_selector(
    parser: &mut SelectorParser,
    first_index: i64,
) -> JsonPathResult<PathToken> {
    let mut indexes = vec![first_index];

    while matches!(parser.peek_token(), Some(Token::Comma)) {
        parser.consume_token(); // consume comma

        let position = parser.position();
        match parser.consume_token() {
            Some(Token::Integer(n)) => indexes.push(n),
            _ => {
                return Err(invalid_expression_error(
                    parser.input,
                    "expected integer after comma in index union",
                    Some(position),
                ));
            }
        }
    }

    parser.expect_token(Token::RightBracket)?;
    Ok(PathToken::IndexOrSlice(ArraySelector::Union(indexes)))
}

/// Parse slice notation starting with integer (e.g., [1:5])
pub fn parse_slice_from_start(parser: &mut SelectorParser, start: i64) -> JsonPathResult<PathToken> {
    parser.consume_token(); // consume colon
    let end = parse_optional_bound(parser);
    let step = parse_optional_step(parser)?;

    parser.expect_token(Token::RightBracket)?;
    Ok(PathToken::IndexOrSlice(ArraySelector::Slice {
        start: Some(start),
        end,
        step: step.unwrap_or(1),
    }))
}

/// Parse slice notation starting with colon (e.g., [:5])
pub fn parse_slice_from_colon(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    parser.consume_token(); // consume colon
    let end = parse_optional_bound(parser);
    let step = parse_optional_step(parser)?;

    parser.expect_token(Token::RightBracket)?;
    Ok(PathToken::IndexOrSlice(ArraySelector::Slice {
        start: None,
        end,
        step: step.unwrap_or(1),
    }))
}

/// Parse the end bound of a slice when present
fn parse_optional_bound(parser: &mut SelectorParser) -> Option<i64> {
    if let Some(Token::Integer(n)) = parser.peek_token() {
        let n = *n;
        parser.consume_token();
        Some(n)
    } else {
        None
    }
}

/// Parse optional step value in slice notation
fn parse_optional_step(parser: &mut SelectorParser) -> JsonPathResult<Option<i64>> {
    if !matches!(parser.peek_token(), Some(Token::Colon)) {
        return Ok(None);
    }

    parser.consume_token(); // consume second colon
    let position = parser.position();
    // After the second colon a step is required
    if let Some(Token::Integer(n)) = parser.peek_token() {
        let n = *n;
        parser.consume_token();
        if n == 0 {
            return Err(invalid_expression_error(
                parser.input,
                "step value cannot be zero in slice expression",
                Some(position),
            ));
        }
        Ok(Some(n))
    } else {
        Err(invalid_expression_error(
            parser.input,
            "step value required after second colon in slice",
            Some(position),
        ))
    }
}
