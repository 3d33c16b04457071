//! Date templates such as `"YYYY년 M월 D일 (dd)"`.
//!
//! | token  | output                         |
//! |--------|--------------------------------|
//! | `YYYY` | four-digit year                |
//! | `MM`   | month, zero-padded (`08`)      |
//! | `M`    | month (`8`)                    |
//! | `DD`   | day of month, zero-padded      |
//! | `D`    | day of month                   |
//! | `dddd` | full weekday name (`화요일`)   |
//! | `dd`   | one-letter weekday (`화`)      |
//!
//! Every occurrence of a token is replaced, and replaced text is never
//! scanned again.

mod lexer;
mod tokens;

pub use lexer::Lexer;
pub use tokens::{Field, SpannedToken, Token};

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Field(Field),
    Literal(String),
}

/// A parsed date template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Parse a template. Parsing can't fail: anything that isn't a token is
    /// kept as literal text.
    pub fn parse(input: &str) -> Template {
        let mut parts = Vec::new();
        let mut literal_start: Option<usize> = None;

        for spanned in Lexer::new(input).tokenize() {
            match spanned.token {
                Token::Literal(_) => {
                    literal_start.get_or_insert(spanned.start);
                }
                Token::Field(field) => {
                    if let Some(start) = literal_start.take() {
                        parts.push(TemplatePart::Literal(input[start..spanned.start].to_string()));
                    }
                    parts.push(TemplatePart::Field(field));
                }
            }
        }
        if let Some(start) = literal_start {
            parts.push(TemplatePart::Literal(input[start..].to_string()));
        }

        Template { parts }
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Returns true if the template contains at least one date field.
    pub fn has_fields(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, TemplatePart::Field(_)))
    }

    /// Render the template for a date.
    pub fn render(&self, date: NaiveDate, locale: &Locale) -> String {
        let mut result = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Field(field) => {
                    result.push_str(&format_field(*field, date, locale));
                }
                TemplatePart::Literal(s) => result.push_str(s),
            }
        }
        result
    }
}

/// Format a single date field.
fn format_field(field: Field, date: NaiveDate, locale: &Locale) -> String {
    // 0 = Sunday, matching the locale tables
    let weekday = date.weekday().num_days_from_sunday() as usize;

    match field {
        Field::Year4 => format!("{:04}", date.year()),
        Field::Month2 => format!("{:02}", date.month()),
        Field::Month => format!("{}", date.month()),
        Field::Day2 => format!("{:02}", date.day()),
        Field::Day => format!("{}", date.day()),
        Field::WeekdayFull => locale.day_names_full[weekday].to_string(),
        Field::WeekdayShort => locale.day_names_short[weekday].to_string(),
    }
}
