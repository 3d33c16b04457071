//! Particle (조사) selection
//!
//! Korean particles come in pairs whose form depends on whether the word
//! they attach to ends in a consonant: 책이 but 사과가. Each [`Particle`]
//! role knows its pair, and [`add_particle`] picks the right member from the
//! last syllable of the word.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::hangul;
use crate::numeral::number_to_korean;
use crate::options::ParticleFallback;

/// Grammatical role of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Particle {
    /// 이/가
    Subject,
    /// 을/를
    Object,
    /// 은/는
    Topic,
    /// 과/와
    Conjunctive,
}

impl Particle {
    pub const ALL: [Particle; 4] = [
        Particle::Subject,
        Particle::Object,
        Particle::Topic,
        Particle::Conjunctive,
    ];

    /// The form used after a final consonant.
    pub fn after_consonant(&self) -> &'static str {
        match self {
            Particle::Subject => "이",
            Particle::Object => "을",
            Particle::Topic => "은",
            Particle::Conjunctive => "과",
        }
    }

    /// The form used after a vowel.
    pub fn after_vowel(&self) -> &'static str {
        match self {
            Particle::Subject => "가",
            Particle::Object => "를",
            Particle::Topic => "는",
            Particle::Conjunctive => "와",
        }
    }

    /// Pick the form for a word whose last sound is (or is not) a consonant.
    pub fn form(&self, final_consonant: bool) -> &'static str {
        if final_consonant {
            self.after_consonant()
        } else {
            self.after_vowel()
        }
    }
}

impl FromStr for Particle {
    type Err = ParseError;

    /// Accepts either member of a pair: "을" and "를" both give `Object`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Particle::ALL
            .into_iter()
            .find(|p| p.after_consonant() == s || p.after_vowel() == s)
            .ok_or_else(|| ParseError::UnknownParticle {
                particle: s.to_string(),
            })
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.after_consonant(), self.after_vowel())
    }
}

/// A particle as the caller wrote it: the role plus the form they asked for.
///
/// Converting from `&str` remembers which member of the pair was given, so
/// that [`ParticleFallback::AsRequested`] can hand it back for words that
/// don't end in Hangul.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requested {
    pub particle: Particle,
    pub form: &'static str,
}

/// A bare [`Particle`] requests its after-consonant form (이, 을, 은, 과).
/// Under [`ParticleFallback::AsRequested`] a word with a non-Hangul ending
/// therefore gets that form: `"API"` + [`Particle::Subject`] is `"API이"`.
/// Parse the form from text (`"가".parse::<Requested>()`) to ask for the
/// other one.
impl From<Particle> for Requested {
    fn from(particle: Particle) -> Self {
        Requested {
            particle,
            form: particle.after_consonant(),
        }
    }
}

impl FromStr for Requested {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let particle: Particle = s.parse()?;
        let form = if particle.after_vowel() == s {
            particle.after_vowel()
        } else {
            particle.after_consonant()
        };
        Ok(Requested { particle, form })
    }
}

/// Append the grammatically correct form of `particle` to `word`.
///
/// Uses [`ParticleFallback::AsRequested`] for words that don't end in a
/// Hangul syllable: the requested form is appended as is. A bare
/// [`Particle`] requests the after-consonant form, so `"API"` with
/// [`Particle::Subject`] gives `"API이"`; pass a parsed [`Requested`] such as
/// `"가"` to get `"API가"`. An empty word is returned unchanged.
///
/// # Examples
/// ```
/// use hangul_moment::{add_particle, Particle, Requested};
///
/// assert_eq!(add_particle("사과", Particle::Object), "사과를");
/// assert_eq!(add_particle("책", "가".parse::<Particle>().unwrap()), "책이");
/// assert_eq!(add_particle("API", Particle::Subject), "API이");
/// assert_eq!(add_particle("API", "가".parse::<Requested>().unwrap()), "API가");
/// ```
pub fn add_particle(word: &str, particle: impl Into<Requested>) -> String {
    add_particle_with(word, particle, ParticleFallback::default())
}

/// Like [`add_particle`], with an explicit policy for non-Hangul endings.
pub fn add_particle_with(
    word: &str,
    particle: impl Into<Requested>,
    fallback: ParticleFallback,
) -> String {
    let requested = particle.into();
    let Some(last) = word.chars().last() else {
        return String::new();
    };

    let form = match hangul::has_final_consonant(last) {
        Some(final_consonant) => requested.particle.form(final_consonant),
        None => fallback_form(word, requested, fallback),
    };

    let mut result = String::with_capacity(word.len() + form.len());
    result.push_str(word);
    result.push_str(form);
    result
}

fn fallback_form(word: &str, requested: Requested, fallback: ParticleFallback) -> &'static str {
    match fallback {
        ParticleFallback::AsRequested => requested.form,
        ParticleFallback::FinalConsonant => requested.particle.after_consonant(),
        ParticleFallback::SpokenDigits => match spoken_digits_final(word) {
            Some(final_consonant) => requested.particle.form(final_consonant),
            None => requested.form,
        },
    }
}

/// Whether the Sino-Korean reading of the trailing digit run of `word` ends
/// in a consonant. `None` if `word` doesn't end in an ASCII digit.
fn spoken_digits_final(word: &str) -> Option<bool> {
    let digits_start = word
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    let digits = &word[digits_start..];

    let value = digits.parse::<u64>().ok()?;
    let reading = number_to_korean(value);
    reading.chars().last().and_then(hangul::has_final_consonant)
}
