//! String and regex literal tokenization
//!
//! Handles parsing of quoted string literals including escape sequences and
//! UTF-16 surrogate pairs, and of `/pattern/flags` regex literals.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Flags accepted after a regex literal
const REGEX_FLAGS: &[char] = &['i', 'm', 's', 'x'];

/// Parse string literal with quote handling and escape sequences
pub(crate) fn parse_string_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let quote = chars[i];
    let start = i;
    i += 1; // Skip opening quote
    let mut string_value = String::new();

    while i < chars.len() {
        if chars[i] == quote {
            break;
        } else if chars[i] == '\\' && i + 1 < chars.len() {
            i += 1; // Skip backslash
            match chars[i] {
                '"' => string_value.push('"'),
                '\'' => string_value.push('\''),
                '\\' => string_value.push('\\'),
                '/' => string_value.push('/'),
                'b' => string_value.push('\u{0008}'),
                'f' => string_value.push('\u{000C}'),
                'n' => string_value.push('\n'),
                'r' => string_value.push('\r'),
                't' => string_value.push('\t'),
                'u' => {
                    i = parse_unicode_escape(parser, chars, i, &mut string_value)?;
                }
                _ => {
                    return Err(invalid_expression_error(
                        &parser.input,
                        "invalid escape sequence",
                        Some(i),
                    ));
                }
            }
        } else {
            string_value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(invalid_expression_error(
            &parser.input,
            "unterminated string literal",
            Some(start),
        ));
    }

    parser.tokens.push(Token::String(string_value), start);
    Ok(i)
}

/// Parse a `/pattern/flags` regex literal following `=~`
pub(crate) fn parse_regex_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let start = i;
    i += 1; // Skip opening slash
    let mut pattern = String::new();

    while i < chars.len() && chars[i] != '/' {
        // \/ is an escaped delimiter, every other escape belongs to the regex
        if chars[i] == '\\' && i + 1 < chars.len() {
            if chars[i + 1] != '/' {
                pattern.push('\\');
            }
            i += 1;
        }
        pattern.push(chars[i]);
        i += 1;
    }

    if i >= chars.len() {
        return Err(invalid_expression_error(
            &parser.input,
            "unterminated regex literal",
            Some(start),
        ));
    }

    let mut flags = String::new();
    while i + 1 < chars.len() && chars[i + 1].is_alphabetic() {
        let flag = chars[i + 1];
        if !REGEX_FLAGS.contains(&flag) {
            return Err(invalid_expression_error(
                &parser.input,
                format!("unsupported regex flag '{flag}'"),
                Some(i + 1),
            ));
        }
        flags.push(flag);
        i += 1;
    }

    parser.tokens.push(Token::Regex { pattern, flags }, start);
    Ok(i)
}

/// Parse Unicode escape sequence \uXXXX with surrogate pair support
fn parse_unicode_escape(
    parser: &ExpressionParser,
    chars: &[char],
    i: usize,
    string_value: &mut String,
) -> JsonPathResult<usize> {
    let code_point = read_hex4(parser, chars, i)?;

    if (0xD800..=0xDBFF).contains(&code_point) {
        // High surrogate, a low surrogate escape must follow
        if i + 6 < chars.len() && chars[i + 5] == '\\' && chars[i + 6] == 'u' {
            let low_surrogate = read_hex4(parser, chars, i + 6)?;
            if !(0xDC00..=0xDFFF).contains(&low_surrogate) {
                return Err(invalid_expression_error(
                    &parser.input,
                    "high surrogate not followed by valid low surrogate",
                    Some(i),
                ));
            }
            let scalar = 0x10000 + ((code_point - 0xD800) << 10) + (low_surrogate - 0xDC00);
            let unicode_char = char::from_u32(scalar).ok_or_else(|| {
                invalid_expression_error(&parser.input, "invalid surrogate pair result", Some(i))
            })?;
            string_value.push(unicode_char);
            Ok(i + 10) // Skip both \uXXXX sequences
        } else {
            Err(invalid_expression_error(
                &parser.input,
                "high surrogate not followed by low surrogate escape sequence",
                Some(i),
            ))
        }
    } else if (0xDC00..=0xDFFF).contains(&code_point) {
        Err(invalid_expression_error(
            &parser.input,
            "low surrogate without preceding high surrogate",
            Some(i),
        ))
    } else {
        let unicode_char = char::from_u32(code_point).ok_or_else(|| {
            invalid_expression_error(&parser.input, "invalid unicode code point", Some(i))
        })?;
        string_value.push(unicode_char);
        Ok(i + 4) // Skip the 4 hex digits
    }
}

/// Read the four hex digits following the `u` at `i`
fn read_hex4(parser: &ExpressionParser, chars: &[char], i: usize) -> JsonPathResult<u32> {
    if i + 4 >= chars.len() {
        return Err(invalid_expression_error(
            &parser.input,
            "incomplete unicode escape sequence",
            Some(i),
        ));
    }
    let hex_digits: String = chars[i + 1..i + 5].iter().collect();
    u32::from_str_radix(&hex_digits, 16).map_err(|_| {
        invalid_expression_error(&parser.input, "invalid unicode escape sequence", Some(i))
    })
}
