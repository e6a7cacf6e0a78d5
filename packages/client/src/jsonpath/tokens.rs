//! Token definitions for `JSONPath` lexical analysis
//!
//! Defines the token types used in `JSONPath` expression parsing and provides
//! utility functions for token comparison and matching.

use std::collections::VecDeque;

/// Tokens for `JSONPath` expression lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Structural tokens
    /// Root identifier token ($)
    Root,
    /// Dot notation token (.)
    Dot,
    /// Double dot (recursive descent) token (..)
    DoubleDot,
    /// Left bracket token ([)
    LeftBracket,
    /// Right bracket token (])
    RightBracket,
    /// Left parenthesis token (()
    LeftParen,
    /// Right parenthesis token ())
    RightParen,
    /// Comma separator token (,)
    Comma,
    /// Colon separator token (:)
    Colon,
    /// Question mark token (?)
    Question,
    /// Current node identifier token (@)
    At,
    /// Wildcard selector token (*)
    Star,

    // Literals
    /// String literal token
    String(String),
    /// Integer literal token
    Integer(i64),
    /// Floating-point number literal token
    Number(f64),
    /// Boolean true literal token
    True,
    /// Boolean false literal token
    False,
    /// Null literal token
    Null,
    /// Regular expression literal token (/pattern/flags)
    Regex {
        /// Pattern between the slashes
        pattern: String,
        /// Trailing flag characters
        flags: String,
    },

    // Operators
    /// Equality operator token (==)
    Equal,
    /// Inequality operator token (!=)
    NotEqual,
    /// Less than operator token (<)
    Less,
    /// Less than or equal operator token (<=)
    LessEq,
    /// Greater than operator token (>)
    Greater,
    /// Greater than or equal operator token (>=)
    GreaterEq,
    /// Regular expression match operator token (=~)
    Match,
    /// Logical AND operator token (&&)
    LogicalAnd,
    /// Logical OR operator token (||)
    LogicalOr,
    /// Logical negation token (!)
    Not,

    // Identifiers
    /// Property identifier token
    Identifier(String),

    // Special
    /// End of file/input token
    EOF,
}

impl Token {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEq
                | Token::Greater
                | Token::GreaterEq
                | Token::Match
        )
    }

    /// Get string representation for diagnostics
    #[must_use]
    pub fn as_debug_str(&self) -> &'static str {
        match self {
            Token::Root => "$",
            Token::Dot => ".",
            Token::DoubleDot => "..",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Question => "?",
            Token::At => "@",
            Token::Star => "*",
            Token::String(_) => "string",
            Token::Integer(_) => "integer",
            Token::Number(_) => "number",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Regex { .. } => "regex",
            Token::Equal => "==",
            Token::NotEqual => "!=",
            Token::Less => "<",
            Token::LessEq => "<=",
            Token::Greater => ">",
            Token::GreaterEq => ">=",
            Token::Match => "=~",
            Token::LogicalAnd => "&&",
            Token::LogicalOr => "||",
            Token::Not => "!",
            Token::Identifier(_) => "identifier",
            Token::EOF => "end of input",
        }
    }
}

/// Utility functions for token matching and comparison
pub struct TokenMatcher;

impl TokenMatcher {
    /// Check if two tokens match, ignoring the payload of literal tokens
    #[inline]
    #[must_use]
    pub fn tokens_match(actual: &Token, expected: &Token) -> bool {
        std::mem::discriminant(actual) == std::mem::discriminant(expected)
    }
}

/// Token queue with the character offset of every token, consumed front to back
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<(Token, usize)>,
    end: usize,
}

impl TokenStream {
    /// Create an empty stream for an input of `end` characters
    #[inline]
    #[must_use]
    pub fn new(end: usize) -> Self {
        Self {
            tokens: VecDeque::new(),
            end,
        }
    }

    /// Append a token found at `offset`
    #[inline]
    pub fn push(&mut self, token: Token, offset: usize) {
        self.tokens.push_back((token, offset));
    }

    /// Last token pushed, used for context-sensitive lexing
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.back().map(|(token, _)| token)
    }

    /// Peek at next token without consuming
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front().map(|(token, _)| token)
    }

    /// Peek `n` tokens ahead without consuming
    #[inline]
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(n).map(|(token, _)| token)
    }

    /// Consume and return next token
    #[inline]
    pub fn consume(&mut self) -> Option<Token> {
        self.tokens.pop_front().map(|(token, _)| token)
    }

    /// Character offset of the next token, or the input length when exhausted
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.tokens.front().map_or(self.end, |(_, offset)| *offset)
    }

    /// Number of tokens left, including the trailing EOF
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether every token has been consumed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
