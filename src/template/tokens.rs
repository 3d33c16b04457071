//! Token types for the template lexer.

/// A date field that a template token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year4,        // YYYY
    Month2,       // MM
    Month,        // M
    Day2,         // DD
    Day,          // D
    WeekdayFull,  // dddd
    WeekdayShort, // dd
}

impl Field {
    /// The token text for this field.
    pub fn pattern(&self) -> &'static str {
        match self {
            Field::Year4 => "YYYY",
            Field::Month2 => "MM",
            Field::Month => "M",
            Field::Day2 => "DD",
            Field::Day => "D",
            Field::WeekdayFull => "dddd",
            Field::WeekdayShort => "dd",
        }
    }
}

/// A token in a template string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Field(Field),
    Literal(char),
}

/// A token with its byte range in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
