//! Error types for parsing and date arithmetic.

use thiserror::Error;

/// Errors that can occur when parsing text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid date: '{input}'")]
    InvalidDate { input: String },

    #[error("unknown time unit: '{unit}'")]
    UnknownUnit { unit: String },

    #[error("unknown particle: '{particle}' (expected one of 이/가, 을/를, 은/는, 과/와)")]
    UnknownParticle { particle: String },
}

/// Errors that can occur when shifting a moment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date out of range: adding {amount} {unit}")]
    OutOfRange { amount: i64, unit: &'static str },
}
