#![cfg(feature = "serde")]

use hangul_moment::{Holiday, Moment, Particle, Season, Unit};

#[test]
fn test_moment_is_transparent() {
    let m: Moment = "2025-08-26T09:30:00.250".parse().unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.starts_with("\"2025-08-26T09:30:00.250"), "{}", json);
    let back: Moment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_enums() {
    assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"Fall\"");
    assert_eq!(serde_json::to_string(&Unit::Month).unwrap(), "\"Month\"");
    let p: Particle = serde_json::from_str("\"Topic\"").unwrap();
    assert_eq!(p, Particle::Topic);
    let h: Holiday = serde_json::from_str("\"HangulDay\"").unwrap();
    assert_eq!(h.date(), (10, 9));
}
