//! Locale tables used when rendering dates.

mod builtin;

pub use builtin::Locale;
