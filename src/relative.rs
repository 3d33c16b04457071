//! Relative time phrases ("3분 전", "모레")
//!
//! A millisecond difference is bucketed into the largest unit that reads
//! naturally. Each unit is derived from the previous one by floor division
//! (seconds from milliseconds, minutes from seconds, and so on), so the
//! buckets never disagree with each other.
//!
//! Past differences under ten seconds read as "방금 전". Differences of one
//! to three whole days use the dedicated words 어제/그저께/그끄저께 and
//! 내일/모레/글피 instead of a count.

use std::fmt;

/// Which side of "now" a moment is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Future,
}

/// The bucket a difference falls into, with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Less than ten seconds in the past.
    JustNow,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

/// A difference between two instants, ready to be read in Korean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub tense: Tense,
    pub span: Span,
}

impl RelativeTime {
    /// Bucket `diff_ms = now - then`. Negative differences are in the future.
    pub fn from_millis(diff_ms: i64) -> RelativeTime {
        let tense = if diff_ms < 0 {
            Tense::Future
        } else {
            Tense::Past
        };

        let seconds = diff_ms.unsigned_abs() / 1000;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        let span = if tense == Tense::Past && seconds < 10 {
            Span::JustNow
        } else if seconds < 60 {
            Span::Seconds(seconds)
        } else if minutes < 60 {
            Span::Minutes(minutes)
        } else if hours < 24 {
            Span::Hours(hours)
        } else if days < 7 {
            Span::Days(days)
        } else if days < 30 {
            Span::Weeks(days / 7)
        } else if days < 365 {
            // 30-day months
            Span::Months(days / 30)
        } else {
            Span::Years(days / 365)
        };

        log::trace!("relative time for {}ms: {:?} {:?}", diff_ms, tense, span);
        RelativeTime { tense, span }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.tense {
            Tense::Past => "전",
            Tense::Future => "후",
        };

        match (self.tense, self.span) {
            (_, Span::JustNow) => f.write_str("방금 전"),
            (_, Span::Seconds(n)) => write!(f, "{}초 {}", n, suffix),
            (_, Span::Minutes(n)) => write!(f, "{}분 {}", n, suffix),
            (_, Span::Hours(n)) => write!(f, "{}시간 {}", n, suffix),
            (Tense::Past, Span::Days(1)) => f.write_str("어제"),
            (Tense::Past, Span::Days(2)) => f.write_str("그저께"),
            (Tense::Past, Span::Days(3)) => f.write_str("그끄저께"),
            (Tense::Future, Span::Days(1)) => f.write_str("내일"),
            (Tense::Future, Span::Days(2)) => f.write_str("모레"),
            (Tense::Future, Span::Days(3)) => f.write_str("글피"),
            (_, Span::Days(n)) => write!(f, "{}일 {}", n, suffix),
            (_, Span::Weeks(n)) => write!(f, "{}주 {}", n, suffix),
            (_, Span::Months(n)) => write!(f, "{}개월 {}", n, suffix),
            (_, Span::Years(n)) => write!(f, "{}년 {}", n, suffix),
        }
    }
}
