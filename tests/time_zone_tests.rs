use chrono::{Local, NaiveDate, Timelike};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use hangul_moment::{Moment, ParseError, Unit};

fn ny(s: &str) -> Moment<Tz> {
    Moment::parse_in(s, &New_York).unwrap()
}

#[test]
fn test_repeated_hour_keeps_both_instants() {
    let first = ny("2025-11-02T01:30:00-04:00");
    let second = ny("2025-11-02T01:30:00-05:00");
    assert_ne!(first, second);
    assert_eq!(first.naive_local(), second.naive_local());
    assert_eq!(first.from_now_at(&second), "1시간 전");
    assert_eq!(second.from_now_at(&first), "1시간 후");
}

#[test]
fn test_elapsed_time_spans_spring_forward() {
    let before = ny("2025-03-08T02:30:00-05:00");
    let after = ny("2025-03-09T03:10:00-04:00");
    assert_eq!(before.from_now_at(&after), "23시간 전");
}

#[test]
fn test_skipped_wall_clock_is_rejected() {
    assert_eq!(
        Moment::parse_in("2025-03-09T02:30", &New_York),
        Err(ParseError::InvalidDate {
            input: "2025-03-09T02:30".to_string()
        })
    );
    let naive = NaiveDate::from_ymd_opt(2025, 3, 9)
        .unwrap()
        .and_hms_opt(2, 30, 0)
        .unwrap();
    assert!(Moment::from_local(naive, &New_York).is_none());
}

#[test]
fn test_repeated_wall_clock_takes_earlier_instant() {
    assert_eq!(ny("2025-11-02T01:30"), ny("2025-11-02T01:30:00-04:00"));
}

#[test]
fn test_day_keeps_wall_clock_across_spring_forward() {
    let start = ny("2025-03-08T12:00");
    let next = start.add(1, Unit::Day).unwrap();
    assert_eq!(next, ny("2025-03-09T12:00"));
    assert_eq!(next.from_now_at(&start), "23시간 후");
    assert_eq!(start.add(24, Unit::Hour).unwrap(), ny("2025-03-09T13:00"));
}

#[test]
fn test_day_into_gap_moves_forward() {
    let start = ny("2025-03-08T02:30");
    let next = start.add(1, Unit::Day).unwrap();
    assert_eq!(next.date(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    assert_eq!(next.naive_local().hour(), 3);
    assert_eq!(next.naive_local().minute(), 30);
}

#[test]
fn test_hour_steps_over_gap() {
    let start = ny("2025-03-09T01:30");
    assert_eq!(start.add(1, Unit::Hour).unwrap(), ny("2025-03-09T03:30"));
}

#[test]
fn test_day_across_fall_back_is_25_hours() {
    let start = ny("2025-11-01T12:00");
    let next = start.add(1, Unit::Day).unwrap();
    assert_eq!(next, ny("2025-11-02T12:00"));
    assert_eq!(start.from_now_at(&next), "어제");
    assert_eq!(next.from_now_at(&start), "내일");
}

#[test]
fn test_zones_compare_by_instant() {
    let local = Moment::from(ny("2025-08-26T09:00").datetime().with_timezone(&Local));
    assert_eq!(local, ny("2025-08-26T09:00"));
}
