//! A tour of every operation, printed to stdout.
//!
//! Run with `cargo run --example tour [level]`, where `level` is a log
//! filter such as `debug` or `trace` (default `info`).

use std::error::Error;

use hangul_moment::{
    add_particle, add_particle_with, number_to_korean, Moment, Particle, ParticleFallback, Unit,
};
use log::LevelFilter;

fn init_logging() -> Result<(), log::SetLoggerError> {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    println!("상대시간:");
    let now = Moment::now();
    println!("  현재: {}", now.from_now());
    for days in [-1, -2, -3, 1, 2, 3] {
        let shifted = now.add(days, Unit::Day)?;
        println!("  {:+}일: {}", days, shifted.from_now_at(&now));
    }
    println!();

    println!("포맷팅:");
    let date: Moment = "2025-08-26".parse()?;
    println!("  기본: {}", date.format_default());
    println!("  커스텀: {}", date.format("YYYY년 M월 D일 (dd)"));
    println!("  풀네임: {}", date.format("YYYY년 M월 D일 (dddd)"));
    println!();

    println!("조사:");
    let words = [
        ("사과", "을"),
        ("바나나", "을"),
        ("책", "이"),
        ("연필", "이"),
        ("집", "은"),
        ("학교", "는"),
        ("음식", "과"),
        ("친구", "와"),
    ];
    for (word, particle) in words {
        let particle: Particle = particle.parse()?;
        println!("  {} + {} = {}", word, particle, add_particle(word, particle));
    }
    println!(
        "  버전3 + 이/가 = {}",
        add_particle_with("버전3", Particle::Subject, ParticleFallback::SpokenDigits)
    );
    println!();

    println!("숫자:");
    for n in [0, 1, 10, 11, 100, 101, 1000, 1234, 10_000, 50_000] {
        println!("  {} = {}", n, number_to_korean(n));
    }
    println!();

    let birth: Moment = "1990-05-15".parse()?;
    println!("나이 (1990-05-15 기준):");
    println!("  만 나이: {}세", now.age(&birth));
    println!("  세는 나이: {}세", now.korean_age(&birth));
    println!();

    println!("계절:");
    for text in ["2025-03-21", "2025-06-21", "2025-09-21", "2025-12-21"] {
        let m: Moment = text.parse()?;
        println!("  {}: {}", text, m.season());
    }
    println!();

    println!("공휴일:");
    for text in ["2025-01-01", "2025-03-01", "2025-05-05", "2025-12-25", "2025-07-07"] {
        let m: Moment = text.parse()?;
        match m.holiday() {
            Some(holiday) => println!("  {}: 공휴일 ({})", text, holiday),
            None => println!("  {}: 평일", text),
        }
    }

    Ok(())
}
