//! Character and identifier tokenization
//!
//! Handles parsing of single-character tokens, identifiers, keywords,
//! and special character sequences like double dots.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse character tokens, identifiers, and keywords
pub(crate) fn parse_character_token(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let token = match chars[i] {
        '$' => Token::Root,
        '.' => {
            if i + 1 < chars.len() && chars[i + 1] == '.' {
                if i + 2 < chars.len() && chars[i + 2] == '.' {
                    return Err(invalid_expression_error(
                        &parser.input,
                        "triple dot '...' is invalid, use '..' for recursive descent",
                        Some(i),
                    ));
                }
                parser.tokens.push(Token::DoubleDot, i);
                return Ok(i + 1); // Skip the second dot
            }
            Token::Dot
        }
        '[' => Token::LeftBracket,
        ']' => Token::RightBracket,
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        ',' => Token::Comma,
        ':' => Token::Colon,
        '?' => Token::Question,
        '@' => Token::At,
        '*' => Token::Star,
        c if c.is_alphabetic() || c == '_' => return parse_identifier(parser, chars, i),
        c => {
            return Err(invalid_expression_error(
                &parser.input,
                format!("unexpected character '{c}'"),
                Some(i),
            ));
        }
    };

    parser.tokens.push(token, i);
    Ok(i)
}

/// Parse identifier or keyword token
fn parse_identifier(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let start = i;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '-') {
        i += 1;
    }
    let identifier: String = chars[start..i].iter().collect();

    // Check for reserved keywords
    let token = match identifier.as_str() {
        "true" => Token::True,
        "false" => Token::False,
        "null" => Token::Null,
        _ => Token::Identifier(identifier),
    };

    parser.tokens.push(token, start);
    Ok(i.saturating_sub(1)) // Adjust for loop increment
}
