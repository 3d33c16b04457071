//! hangul-moment - Korean-friendly dates, particles and numerals
//!
//! This crate wraps a point in time in a [`Moment`] and reads it the way a
//! Korean speaker would: relative phrases like "그저께" and "3분 후",
//! `YYYY년 MM월 DD일` templates, full and traditional ages, seasons and
//! fixed-date public holidays. Alongside it are two standalone text helpers:
//! [`add_particle`] picks 이/가, 을/를, 은/는 or 과/와 for a word, and
//! [`number_to_korean`] spells an integer in Sino-Korean numerals.

pub mod calendar;
pub mod error;
pub mod hangul;
pub mod options;
pub mod relative;
pub mod template;

mod cache;
mod locale;
mod moment;
mod numeral;
mod particle;
mod unit;

pub use calendar::{Holiday, Season};
pub use error::{DateError, ParseError};
pub use locale::Locale;
pub use moment::Moment;
pub use numeral::number_to_korean;
pub use options::{FormatOptions, ParticleFallback};
pub use particle::{add_particle, add_particle_with, Particle, Requested};
pub use relative::RelativeTime;
pub use template::Template;
pub use unit::Unit;
