//! Bracket notation selector parsing
//!
//! Handles parsing of bracket-notation selectors including array indices,
//! quoted member names, predicates, wildcards, and unions.

use super::core::SelectorParser;
use crate::jsonpath::{
    ast::{PathToken, PredicateToken},
    error::{JsonPathResult, invalid_expression_error},
    filter_parser::FilterParser,
    tokens::Token,
};

/// Parse bracket-notation selector ([index], [start:end], [?expression], ['name'])
pub fn parse_bracket_selector(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    let position = parser.position();
    match parser.peek_token() {
        Some(Token::Star) => {
            parser.consume_token();
            parser.expect_token(Token::RightBracket)?;
            Ok(PathToken::Wildcard)
        }
        Some(Token::Question) => {
            parser.consume_token();
            parse_predicate(parser)
        }
        Some(Token::String(_)) => parse_member_names(parser),
        Some(Token::Integer(n)) => {
            let index = *n;
            parser.consume_token();
            super::slice::parse_index_or_slice(parser, index)
        }
        Some(Token::Colon) => super::slice::parse_slice_from_colon(parser),
        Some(Token::At) => Err(invalid_expression_error(
            parser.input,
            "current node identifier '@' is only valid within filter expressions [?...]",
            Some(position),
        )),
        Some(Token::EOF) | None => Err(invalid_expression_error(
            parser.input,
            "unclosed bracket",
            Some(position),
        )),
        _ => Err(invalid_expression_error(
            parser.input,
            "expected index, slice, filter, string, or wildcard in brackets",
            Some(position),
        )),
    }
}

/// Parse `['a']` or the name union `['a','b']`
fn parse_member_names(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    let mut names = Vec::new();

    loop {
        let position = parser.position();
        match parser.consume_token() {
            Some(Token::String(name)) => names.push(name),
            _ => {
                return Err(invalid_expression_error(
                    parser.input,
                    "expected quoted property name in bracket union",
                    Some(position),
                ));
            }
        }

        if matches!(parser.peek_token(), Some(Token::Comma)) {
            parser.consume_token();
        } else {
            break;
        }
    }

    parser.expect_token(Token::RightBracket)?;
    Ok(PathToken::Child { names })
}

/// Parse the part of a predicate selector after `?`
fn parse_predicate(parser: &mut SelectorParser) -> JsonPathResult<PathToken> {
    if matches!(parser.peek_token(), Some(Token::RightBracket)) {
        parser.consume_token();
        return Ok(PathToken::Predicate(PredicateToken::Placeholder));
    }

    let start = parser.position();
    let expression = FilterParser::new(parser.tokens, parser.input)
        .with_options(parser.options)
        .parse_filter_expression()?;
    let end = parser.position();
    parser.expect_token(Token::RightBracket)?;

    let source: String = parser
        .input
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();

    Ok(PathToken::Predicate(PredicateToken::Inline {
        source: source.trim().to_string(),
        expression,
    }))
}
