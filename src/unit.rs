//! Time units accepted by [`Moment::add`](crate::Moment::add).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A unit of calendar or clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Singular English name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Length in seconds, or `None` for calendar units whose length varies.
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Unit::Second => Some(1),
            Unit::Minute => Some(60),
            Unit::Hour => Some(60 * 60),
            Unit::Day => Some(24 * 60 * 60),
            Unit::Week => Some(7 * 24 * 60 * 60),
            Unit::Month | Unit::Year => None,
        }
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    /// Singular and plural forms are both accepted; matching is
    /// case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" | "seconds" => Ok(Unit::Second),
            "minute" | "minutes" => Ok(Unit::Minute),
            "hour" | "hours" => Ok(Unit::Hour),
            "day" | "days" => Ok(Unit::Day),
            "week" | "weeks" => Ok(Unit::Week),
            "month" | "months" => Ok(Unit::Month),
            "year" | "years" => Ok(Unit::Year),
            _ => Err(ParseError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
