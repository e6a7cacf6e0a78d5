//! Number literal tokenization
//!
//! Handles parsing of integer and floating-point literals with
//! validation for leading zeros and negative zero restrictions.

use super::core::ExpressionParser;
use crate::jsonpath::{
    error::{JsonPathResult, invalid_expression_error},
    tokens::Token,
};

/// Parse number literal (integer or float)
pub(crate) fn parse_number_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    mut i: usize,
) -> JsonPathResult<usize> {
    let start = i;

    if chars[i] == '-' {
        i += 1;
    }

    let digit_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    if i == digit_start {
        return Err(invalid_expression_error(
            &parser.input,
            "'-' must be followed by a digit",
            Some(start),
        ));
    }

    // Integers cannot have leading zeros (except for "0" itself)
    if i > digit_start + 1 && chars[digit_start] == '0' {
        return Err(invalid_expression_error(
            &parser.input,
            "integers cannot have leading zeros",
            Some(digit_start),
        ));
    }

    let mut is_float = false;
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1; // Skip decimal point
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        is_float = true;
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        let exponent_start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return Err(invalid_expression_error(
                &parser.input,
                "exponent requires at least one digit",
                Some(exponent_start),
            ));
        }
    }

    // "-0" has no integer meaning
    if !is_float && start < digit_start && chars[digit_start] == '0' && i == digit_start + 1 {
        return Err(invalid_expression_error(
            &parser.input,
            "negative zero is not allowed",
            Some(start),
        ));
    }

    let number_str: String = chars[start..i].iter().collect();
    let token = if is_float {
        number_str.parse::<f64>().map(Token::Number).map_err(|_| {
            invalid_expression_error(
                &parser.input,
                "invalid floating point number format",
                Some(start),
            )
        })?
    } else {
        number_str.parse::<i64>().map(Token::Integer).map_err(|_| {
            invalid_expression_error(&parser.input, "invalid integer format", Some(start))
        })?
    };

    parser.tokens.push(token, start);
    Ok(i.saturating_sub(1)) // Adjust for loop increment
}
