//! The [`Moment`] type: one point in time with Korean-aware formatting.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Local, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    SubsecRound, TimeDelta, TimeZone, Utc,
};

use crate::cache;
use crate::calendar::{Holiday, Season};
use crate::error::{DateError, ParseError};
use crate::options::FormatOptions;
use crate::relative::RelativeTime;
use crate::unit::Unit;

/// Formats tried, in order, for text without a UTC offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// An instant with millisecond precision, viewed in a time zone.
///
/// Elapsed time (`from_now`) is measured between instants, so daylight
/// saving changes never distort it. Calendar questions (format, age, season,
/// holiday) are answered in the zone's local time. The zone defaults to the
/// system's [`Local`] zone; any chrono [`TimeZone`] works.
///
/// `Moment` is a small value. Operations that move it in time return a new
/// `Moment` and leave the receiver untouched.
///
/// # Examples
/// ```
/// use hangul_moment::{Moment, Unit};
///
/// let m: Moment = "2025-08-26".parse().unwrap();
/// assert_eq!(m.format("YYYY년 M월 D일 (dd)"), "2025년 8월 26일 (화)");
///
/// let next = m.add(1, Unit::Month).unwrap();
/// assert_eq!(next.format_default(), "2025년 09월 26일");
/// ```
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(
            serialize = "DateTime<Tz>: serde::Serialize",
            deserialize = "DateTime<Tz>: serde::Deserialize<'de>"
        )
    )
)]
pub struct Moment<Tz: TimeZone = Local> {
    datetime: DateTime<Tz>,
}

impl Moment {
    /// The current instant in the local zone.
    pub fn now() -> Moment {
        Moment::now_in(&Local)
    }

    /// Parse an ISO-8601 date or date-time in the local zone.
    ///
    /// See [`Moment::parse_in`] for the accepted forms.
    pub fn parse(input: &str) -> Result<Moment, ParseError> {
        Moment::parse_in(input, &Local)
    }
}

impl<Tz: TimeZone> Moment<Tz> {
    /// The current instant in `tz`.
    pub fn now_in(tz: &Tz) -> Moment<Tz> {
        Moment::from(Utc::now().with_timezone(tz))
    }

    /// Parse an ISO-8601 date or date-time, reading wall-clock text in `tz`.
    ///
    /// Accepted forms:
    /// - `2025-08-26` (midnight)
    /// - `2025-08-26T14:30`, `2025-08-26T14:30:05`, `2025-08-26T14:30:05.250`
    ///   (a space may replace the `T`)
    /// - RFC 3339 with an offset, e.g. `2025-08-26T14:30:00+09:00`; the
    ///   instant is kept and viewed in `tz`
    ///
    /// Wall-clock text that falls in a daylight saving gap doesn't name a
    /// real instant and is rejected. Text in a repeated hour takes the
    /// earlier of the two instants.
    pub fn parse_in(input: &str, tz: &Tz) -> Result<Moment<Tz>, ParseError> {
        let text = input.trim();

        let naive = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN))
            .ok()
            .or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            });

        let parsed = match naive {
            Some(naive) => Moment::from_local(naive, tz),
            None => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| Moment::from(datetime.with_timezone(tz))),
        };

        parsed.ok_or_else(|| {
            log::debug!("could not parse {:?} as a date", input);
            ParseError::InvalidDate {
                input: input.to_string(),
            }
        })
    }

    /// The instant whose wall-clock time in `tz` is `naive`.
    ///
    /// `None` when `naive` falls in a daylight saving gap. A repeated
    /// wall-clock time resolves to the earlier instant.
    pub fn from_local(naive: NaiveDateTime, tz: &Tz) -> Option<Moment<Tz>> {
        tz.from_local_datetime(&naive).earliest().map(Moment::from)
    }

    /// The wrapped instant.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.datetime.clone()
    }

    /// Wall-clock date and time in the moment's zone.
    pub fn naive_local(&self) -> NaiveDateTime {
        self.datetime.naive_local()
    }

    /// The calendar date in the moment's zone.
    pub fn date(&self) -> NaiveDate {
        self.datetime.date_naive()
    }

    /// How long ago (or how far ahead) this moment is, read in Korean.
    ///
    /// Evaluated against the clock at call time, so repeated calls can
    /// return different phrases.
    pub fn from_now(&self) -> String {
        self.from_now_at(&Moment::<Local>::now())
    }

    /// Like [`Moment::from_now`], measured from a fixed `now`.
    pub fn from_now_at<Tz2: TimeZone>(&self, now: &Moment<Tz2>) -> String {
        self.relative_to(now).to_string()
    }

    /// The bucketed elapsed time between this moment and `now`.
    pub fn relative_to<Tz2: TimeZone>(&self, now: &Moment<Tz2>) -> RelativeTime {
        let diff = now.datetime.naive_utc() - self.datetime.naive_utc();
        RelativeTime::from_millis(diff.num_milliseconds())
    }

    /// Format with a template, e.g. `"YYYY년 M월 D일 (dddd)"`.
    ///
    /// See [`Template`](crate::Template) for the token list.
    pub fn format(&self, template: &str) -> String {
        self.format_with(template, &FormatOptions::default())
    }

    /// Format with the locale's default template (`"YYYY년 MM월 DD일"`).
    pub fn format_default(&self) -> String {
        let opts = FormatOptions::default();
        self.format_with(opts.locale.default_template, &opts)
    }

    /// Format with a template and explicit options.
    pub fn format_with(&self, template: &str, opts: &FormatOptions) -> String {
        cache::get_or_parse(template).render(self.date(), &opts.locale)
    }

    /// Age in the traditional counting system (세는 나이) as of this moment:
    /// everyone is one at birth and gains a year every January 1st.
    pub fn korean_age<Tz2: TimeZone>(&self, birth: &Moment<Tz2>) -> i32 {
        self.datetime.year() - birth.datetime.year() + 1
    }

    /// Full age (만 나이) as of this moment: whole years since `birth`.
    pub fn age<Tz2: TimeZone>(&self, birth: &Moment<Tz2>) -> i32 {
        let mut age = self.datetime.year() - birth.datetime.year();
        let today = (self.datetime.month(), self.datetime.day());
        let birthday = (birth.datetime.month(), birth.datetime.day());
        if today < birthday {
            age -= 1;
        }
        age
    }

    /// The season of the moment's month (봄, 여름, 가을, 겨울).
    pub fn season(&self) -> Season {
        Season::of_month(self.datetime.month())
    }

    /// Returns true if this date is one of the fixed-date public holidays.
    pub fn is_holiday(&self) -> bool {
        self.holiday().is_some()
    }

    /// The fixed-date public holiday on this date, if any.
    pub fn holiday(&self) -> Option<Holiday> {
        Holiday::on(self.datetime.month(), self.datetime.day())
    }

    /// Returns a new moment shifted by `amount` units.
    ///
    /// Seconds, minutes and hours are exact elapsed durations. Days and
    /// weeks move the local calendar date and keep the wall-clock time, so
    /// a day can be 23 or 25 hours long across a daylight saving change.
    /// Months and years also move the local date, clamping to the end of the
    /// target month when the day doesn't exist there: January 31 plus one
    /// month is February 28 (29 in a leap year).
    ///
    /// A wall-clock time that lands in a daylight saving gap moves forward
    /// by the length of the gap (02:30 becomes 03:30).
    pub fn add(&self, amount: i64, unit: Unit) -> Result<Moment<Tz>, DateError> {
        let out_of_range = DateError::OutOfRange {
            amount,
            unit: unit.name(),
        };

        let shifted = match unit {
            Unit::Second | Unit::Minute | Unit::Hour => unit
                .seconds()
                .and_then(|seconds| amount.checked_mul(seconds))
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| self.datetime.clone().checked_add_signed(delta))
                .map(Moment::from),
            Unit::Day | Unit::Week => {
                let days = match unit {
                    Unit::Week => amount.checked_mul(7),
                    _ => Some(amount),
                };
                days.and_then(TimeDelta::try_days)
                    .and_then(|delta| self.naive_local().checked_add_signed(delta))
                    .and_then(|naive| self.resolve_local(naive))
            }
            Unit::Month | Unit::Year => {
                let months = match unit {
                    Unit::Year => amount.checked_mul(12),
                    _ => Some(amount),
                };
                months
                    .and_then(|months| shift_months(self.naive_local(), months))
                    .and_then(|naive| self.resolve_local(naive))
            }
        };

        shifted.ok_or(out_of_range)
    }

    /// Returns a new moment shifted back by `amount` units.
    pub fn subtract(&self, amount: i64, unit: Unit) -> Result<Moment<Tz>, DateError> {
        let negated = amount.checked_neg().ok_or(DateError::OutOfRange {
            amount,
            unit: unit.name(),
        })?;
        self.add(negated, unit)
    }

    /// Map a wall-clock time in this moment's zone back to an instant.
    fn resolve_local(&self, naive: NaiveDateTime) -> Option<Moment<Tz>> {
        let tz = self.datetime.timezone();
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(datetime) => Some(Moment::from(datetime)),
            LocalResult::Ambiguous(earlier, _) => Some(Moment::from(earlier)),
            LocalResult::None => {
                // Inside a gap: read the time with the offset from a day earlier.
                let before = tz
                    .from_local_datetime(&naive.checked_sub_signed(TimeDelta::try_days(1)?)?)
                    .earliest()?;
                let offset = TimeDelta::try_seconds(before.offset().fix().local_minus_utc().into())?;
                let utc = naive.checked_sub_signed(offset)?;
                Some(Moment::from(tz.from_utc_datetime(&utc)))
            }
        }
    }
}

fn shift_months(datetime: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        datetime.checked_add_months(count)
    } else {
        datetime.checked_sub_months(count)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment<Tz> {
    /// Sub-millisecond precision is dropped.
    fn from(datetime: DateTime<Tz>) -> Self {
        Moment {
            datetime: datetime.trunc_subsecs(3),
        }
    }
}

impl<Tz: TimeZone> Clone for Moment<Tz> {
    fn clone(&self) -> Self {
        Moment {
            datetime: self.datetime.clone(),
        }
    }
}

impl<Tz: TimeZone> Copy for Moment<Tz> where DateTime<Tz>: Copy {}

/// Moments are equal when they name the same instant, whatever their zones.
impl<Tz: TimeZone, Tz2: TimeZone> PartialEq<Moment<Tz2>> for Moment<Tz> {
    fn eq(&self, other: &Moment<Tz2>) -> bool {
        self.datetime == other.datetime
    }
}

impl<Tz: TimeZone> Eq for Moment<Tz> {}

impl<Tz: TimeZone> PartialOrd for Moment<Tz> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tz: TimeZone> Ord for Moment<Tz> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

impl<Tz: TimeZone> Hash for Moment<Tz> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datetime.hash(state);
    }
}

impl FromStr for Moment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Moment::parse(s)
    }
}

impl<Tz: TimeZone> fmt::Display for Moment<Tz> {
    /// Local wall-clock time, e.g. `2025-08-26T09:05:00.000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_local().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}
