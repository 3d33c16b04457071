use hangul_moment::{add_particle, add_particle_with, Particle, ParticleFallback, Requested};

fn attach(word: &str, particle: &str) -> String {
    let requested: Requested = particle.parse().unwrap();
    add_particle(word, requested)
}

#[test]
fn test_vowel_and_consonant_endings() {
    assert_eq!(attach("사과", "을"), "사과를");
    assert_eq!(attach("바나나", "을"), "바나나를");
    assert_eq!(attach("책", "이"), "책이");
    assert_eq!(attach("연필", "이"), "연필이");
    assert_eq!(attach("집", "은"), "집은");
    assert_eq!(attach("학교", "는"), "학교는");
    assert_eq!(attach("음식", "과"), "음식과");
    assert_eq!(attach("친구", "와"), "친구와");
}

#[test]
fn test_either_form_resolves() {
    assert_eq!(attach("책", "가"), "책이");
    assert_eq!(attach("사과", "이"), "사과가");
    assert_eq!(attach("학교", "은"), "학교는");
    assert_eq!(attach("친구", "과"), "친구와");
}

#[test]
fn test_role_enum() {
    assert_eq!(add_particle("고양이", Particle::Topic), "고양이는");
    assert_eq!(add_particle("물", Particle::Object), "물을");
    assert_eq!("를".parse::<Particle>(), Ok(Particle::Object));
    assert_eq!(Particle::Conjunctive.to_string(), "과/와");
}

#[test]
fn test_empty_word() {
    assert_eq!(add_particle("", Particle::Subject), "");
}

#[test]
fn test_unknown_particle() {
    assert!("의".parse::<Particle>().is_err());
    assert!("".parse::<Requested>().is_err());
}

#[test]
fn test_non_hangul_keeps_requested_form() {
    assert_eq!(attach("API", "가"), "API가");
    assert_eq!(attach("API", "이"), "API이");
    assert_eq!(attach("Rust", "를"), "Rust를");
}

#[test]
fn test_bare_particle_requests_consonant_form() {
    assert_eq!(add_particle("API", Particle::Subject), "API이");
    assert_eq!(add_particle("Rust", Particle::Topic), "Rust은");
    assert_eq!(Requested::from(Particle::Object).form, "을");
    // Hangul endings still choose for themselves
    assert_eq!(add_particle("바나나", Particle::Subject), "바나나가");
}

#[test]
fn test_final_consonant_fallback() {
    let r: Requested = "가".parse().unwrap();
    assert_eq!(
        add_particle_with("API", r, ParticleFallback::FinalConsonant),
        "API이"
    );
}

#[test]
fn test_spoken_digits_fallback() {
    let fallback = ParticleFallback::SpokenDigits;
    assert_eq!(add_particle_with("버전3", Particle::Subject, fallback), "버전3이");
    assert_eq!(add_particle_with("2", Particle::Subject, fallback), "2가");
    assert_eq!(add_particle_with("10", Particle::Object, fallback), "10을");
    assert_eq!(add_particle_with("14", Particle::Topic, fallback), "14는");
    // No trailing digits: the requested form is kept
    let r: Requested = "와".parse().unwrap();
    assert_eq!(add_particle_with("C++", r, fallback), "C++와");
}

#[test]
fn test_only_last_character_matters() {
    assert_eq!(add_particle("ABC책", Particle::Subject), "ABC책이");
    assert_eq!(add_particle("책 두 권", Particle::Object), "책 두 권을");
}
