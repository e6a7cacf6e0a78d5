//! Core tokenizer types and parser implementation
//!
//! Provides the main ExpressionParser struct and core parsing logic
//! for JSONPath expressions.

use crate::jsonpath::{
    ast::PathToken,
    compiler::CompileOptions,
    error::{JsonPathResult, invalid_expression_error},
    selector_parser::SelectorParser,
    tokens::{Token, TokenStream},
};

/// Main expression parser that combines tokenization and parsing
pub struct ExpressionParser {
    pub(crate) input: String,
    pub(crate) tokens: TokenStream,
    pub(crate) options: CompileOptions,
}

impl ExpressionParser {
    /// Create new expression parser
    #[inline]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: TokenStream::new(input.chars().count()),
            options: CompileOptions::default(),
        }
    }

    /// Set the options applied while parsing predicates
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse complete JSONPath expression into an ordered token chain
    pub fn parse(&mut self) -> JsonPathResult<Vec<PathToken>> {
        self.tokenize()?;

        // $name is not a selector: the root must be followed by '.', '..' or '['
        if matches!(self.tokens.peek(), Some(Token::Root))
            && matches!(self.tokens.peek_nth(1), Some(Token::Identifier(_)))
        {
            return Err(invalid_expression_error(
                &self.input,
                "property access requires '.' (dot) or '[]' (bracket) notation after root '$'",
                Some(1),
            ));
        }

        let mut path_tokens = Vec::new();
        let mut selector_parser =
            SelectorParser::new(&mut self.tokens, &self.input).with_options(self.options);

        while !matches!(selector_parser.peek_token(), Some(Token::EOF) | None) {
            let segment = selector_parser.parse_segment(path_tokens.is_empty())?;
            path_tokens.extend(segment);
        }

        Ok(path_tokens)
    }

    /// Tokenize the input expression
    pub(crate) fn tokenize(&mut self) -> JsonPathResult<()> {
        use super::{characters, numbers, operators, strings};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {
                    // Skip whitespace
                }
                '\'' | '"' => {
                    i = strings::parse_string_literal(self, &chars, i)?;
                }
                '/' if matches!(self.tokens.last(), Some(Token::Match)) => {
                    i = strings::parse_regex_literal(self, &chars, i)?;
                }
                c if c.is_ascii_digit() || c == '-' => {
                    i = numbers::parse_number_literal(self, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '&' | '|' => {
                    i = operators::parse_operator(self, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.tokens.push(Token::EOF, chars.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut parser = ExpressionParser::new(input);
        parser.tokenize().expect("tokenize should succeed");
        let mut out = Vec::new();
        while let Some(token) = parser.tokens.consume() {
            out.push(token);
        }
        out
    }

    #[test]
    fn test_tokenize_dotted_path() {
        assert_eq!(
            tokenize("$.store..book"),
            vec![
                Token::Root,
                Token::Dot,
                Token::Identifier("store".into()),
                Token::DoubleDot,
                Token::Identifier("book".into()),
                Token::EOF,
            ]
        );
    }

    #[test]
    fn test_tokenize_regex_only_after_match_operator() {
        let tokens = tokenize("@.name =~ /^a.*/i");
        assert!(tokens.contains(&Token::Regex {
            pattern: "^a.*".into(),
            flags: "i".into()
        }));
    }

    #[test]
    fn test_tokenize_rejects_triple_dot() {
        let mut parser = ExpressionParser::new("$...a");
        assert!(parser.tokenize().is_err());
    }
}
