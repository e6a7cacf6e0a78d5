//! Operator tokenization for comparison and logical operators
//!
//! Handles parsing of multi-character operators like ==, !=, <=, >=, =~, &&, ||
//! with validation for single-character operator restrictions.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse operator tokens (comparison and logical operators)
pub(crate) fn parse_operator(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let next = chars.get(i + 1).copied();

    let (token, width) = match (chars[i], next) {
        ('=', Some('=')) => (Token::Equal, 2),
        ('=', Some('~')) => (Token::Match, 2),
        ('=', _) => {
            return Err(invalid_expression_error(
                &parser.input,
                "single '=' not supported, use '==' for equality",
                Some(i),
            ));
        }
        ('!', Some('=')) => (Token::NotEqual, 2),
        ('!', _) => (Token::Not, 1),
        ('<', Some('=')) => (Token::LessEq, 2),
        ('<', _) => (Token::Less, 1),
        ('>', Some('=')) => (Token::GreaterEq, 2),
        ('>', _) => (Token::Greater, 1),
        ('&', Some('&')) => (Token::LogicalAnd, 2),
        ('&', _) => {
            return Err(invalid_expression_error(
                &parser.input,
                "single '&' not supported, use '&&' for logical AND",
                Some(i),
            ));
        }
        ('|', Some('|')) => (Token::LogicalOr, 2),
        ('|', _) => {
            return Err(invalid_expression_error(
                &parser.input,
                "single '|' not supported, use '||' for logical OR",
                Some(i),
            ));
        }
        (c, _) => {
            return Err(invalid_expression_error(
                &parser.input,
                format!("unexpected operator character '{c}'"),
                Some(i),
            ));
        }
    };

    parser.tokens.push(token, i);
    Ok(i + width - 1) // Leave the last character for the loop increment
}
