//! Seasons and fixed-date public holidays
//!
//! Both are pure functions of (month, day). Seasons follow the usual Korean
//! split of three months each, starting with spring in March. Holidays are
//! the solar-calendar public holidays that fall on the same date every year;
//! lunar holidays (설날, 추석, 부처님오신날) and substitute holidays are not
//! covered.

use std::fmt;

use crate::locale::Locale;

/// One of the four seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season of a month (1-12).
    pub fn of_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Localized name of the season.
    pub fn name(&self, locale: &Locale) -> &'static str {
        let index = match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        };
        locale.season_names[index]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(&Locale::ko_kr()))
    }
}

/// A fixed-date public holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// 신정, January 1
    NewYearsDay,
    /// 삼일절, March 1
    IndependenceMovementDay,
    /// 어린이날, May 5
    ChildrensDay,
    /// 현충일, June 6
    MemorialDay,
    /// 광복절, August 15
    LiberationDay,
    /// 개천절, October 3
    NationalFoundationDay,
    /// 한글날, October 9
    HangulDay,
    /// 크리스마스, December 25
    Christmas,
}

impl Holiday {
    pub const ALL: [Holiday; 8] = [
        Holiday::NewYearsDay,
        Holiday::IndependenceMovementDay,
        Holiday::ChildrensDay,
        Holiday::MemorialDay,
        Holiday::LiberationDay,
        Holiday::NationalFoundationDay,
        Holiday::HangulDay,
        Holiday::Christmas,
    ];

    /// The (month, day) the holiday falls on.
    pub fn date(&self) -> (u32, u32) {
        match self {
            Holiday::NewYearsDay => (1, 1),
            Holiday::IndependenceMovementDay => (3, 1),
            Holiday::ChildrensDay => (5, 5),
            Holiday::MemorialDay => (6, 6),
            Holiday::LiberationDay => (8, 15),
            Holiday::NationalFoundationDay => (10, 3),
            Holiday::HangulDay => (10, 9),
            Holiday::Christmas => (12, 25),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "신정",
            Holiday::IndependenceMovementDay => "삼일절",
            Holiday::ChildrensDay => "어린이날",
            Holiday::MemorialDay => "현충일",
            Holiday::LiberationDay => "광복절",
            Holiday::NationalFoundationDay => "개천절",
            Holiday::HangulDay => "한글날",
            Holiday::Christmas => "크리스마스",
        }
    }

    /// The holiday on a given (month, day), if any.
    pub fn on(month: u32, day: u32) -> Option<Holiday> {
        Holiday::ALL
            .into_iter()
            .find(|holiday| holiday.date() == (month, day))
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
