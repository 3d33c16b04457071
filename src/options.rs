//! Formatting options and configuration.

use crate::locale::Locale;

/// How a particle is chosen when the word does not end in a Hangul syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleFallback {
    /// Append the form the caller asked for, unchanged.
    #[default]
    AsRequested,
    /// Always append the form used after a final consonant (이/을/은/과).
    FinalConsonant,
    /// Read a trailing run of ASCII digits aloud in Sino-Korean and choose by
    /// the final sound of the reading ("3" is 삼, so 이). Other characters
    /// behave like [`ParticleFallback::AsRequested`].
    SpokenDigits,
}

/// Options for formatting moments.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// The locale for weekday and season names and the default template.
    pub locale: Locale,
}
