//! Lexer for date templates.
//!
//! Templates are scanned once, left to right. At each position the longest
//! token that matches wins (`MM` over `M`, `dddd` over `dd`); any other
//! character, including a lone `Y` or `d`, is a literal. There is no escape
//! syntax.

use crate::template::tokens::{Field, SpannedToken, Token};

/// Candidates tried at each position, longest first within a leading char.
const FIELDS: [Field; 7] = [
    Field::Year4,
    Field::Month2,
    Field::Month,
    Field::Day2,
    Field::Day,
    Field::WeekdayFull,
    Field::WeekdayShort,
];

/// A lexer for template strings.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Option<SpannedToken> {
        let rest = &self.input[self.position..];
        let start = self.position;

        if let Some(field) = FIELDS.iter().find(|f| rest.starts_with(f.pattern())) {
            self.position += field.pattern().len();
            return Some(SpannedToken {
                token: Token::Field(*field),
                start,
                end: self.position,
            });
        }

        let c = rest.chars().next()?;
        self.position += c.len_utf8();
        Some(SpannedToken {
            token: Token::Literal(c),
            start,
            end: self.position,
        })
    }

    /// Tokenize the entire input.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(tokens("MM"), vec![Token::Field(Field::Month2)]);
        assert_eq!(
            tokens("MMM"),
            vec![Token::Field(Field::Month2), Token::Field(Field::Month)]
        );
        assert_eq!(
            tokens("ddd"),
            vec![Token::Field(Field::WeekdayShort), Token::Literal('d')]
        );
        assert_eq!(tokens("dddd"), vec![Token::Field(Field::WeekdayFull)]);
    }

    #[test]
    fn test_partial_year_is_literal() {
        assert_eq!(
            tokens("YY"),
            vec![Token::Literal('Y'), Token::Literal('Y')]
        );
    }

    #[test]
    fn test_multibyte_literals() {
        let spanned = Lexer::new("D일").tokenize();
        assert_eq!(spanned.len(), 2);
        assert_eq!(spanned[0].token, Token::Field(Field::Day));
        assert_eq!(spanned[1].token, Token::Literal('일'));
        assert_eq!((spanned[1].start, spanned[1].end), (1, 4));
    }
}
