use hangul_moment::Moment;

fn m(s: &str) -> Moment {
    s.parse().unwrap()
}

#[test]
fn test_after_birthday() {
    let today = m("2025-08-26");
    let birth = m("1990-05-15");
    assert_eq!(today.age(&birth), 35);
    assert_eq!(today.korean_age(&birth), 36);
}

#[test]
fn test_before_birthday() {
    let today = m("2025-05-14");
    let birth = m("1990-05-15");
    assert_eq!(today.age(&birth), 34);
    assert_eq!(today.korean_age(&birth), 36);
}

#[test]
fn test_on_birthday() {
    assert_eq!(m("2025-05-15").age(&m("1990-05-15")), 35);
}

#[test]
fn test_earlier_month_later_day() {
    // April 30 is before May 15 even though 30 > 15
    assert_eq!(m("2025-04-30").age(&m("1990-05-15")), 34);
    // June 1 is after May 15 even though 1 < 15
    assert_eq!(m("2025-06-01").age(&m("1990-05-15")), 35);
}

#[test]
fn test_newborn() {
    let birth = m("2025-12-31");
    assert_eq!(m("2025-12-31").korean_age(&birth), 1);
    assert_eq!(m("2026-01-01").korean_age(&birth), 2);
    assert_eq!(m("2026-01-01").age(&birth), 0);
}

#[test]
fn test_conventions_differ_by_one_or_two() {
    let birth = m("1990-05-15");
    for today in ["2025-01-01", "2025-05-14", "2025-05-15", "2025-12-31"] {
        let today = m(today);
        let gap = today.korean_age(&birth) - today.age(&birth);
        assert!(gap == 1 || gap == 2, "gap {} on {}", gap, today);
    }
}

#[test]
fn test_now_matches_current_year() {
    let now = Moment::now();
    let birth = m("2000-01-01");
    let year: i32 = now.format("YYYY").parse().unwrap();
    assert_eq!(now.korean_age(&birth), year - 2000 + 1);
}
