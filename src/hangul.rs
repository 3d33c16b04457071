//! Hangul syllable arithmetic
//!
//! Precomposed Hangul syllables occupy U+AC00..=U+D7A3 and are laid out as
//!
//! ```text
//! code = 0xAC00 + (initial * 21 * 28) + (medial * 28) + final
//! ```
//!
//! where `final == 0` means the syllable has no trailing consonant
//! (받침). Everything here is plain integer arithmetic on that layout.

/// First precomposed syllable (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const FINAL_COUNT: u32 = 28;

/// Returns true if `c` is a precomposed Hangul syllable.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Returns the final-consonant index (0-27) of a syllable, or `None` for
/// characters outside the syllable block. Index 0 means no final consonant.
pub fn final_index(c: char) -> Option<u32> {
    if !is_syllable(c) {
        return None;
    }
    Some((c as u32 - SYLLABLE_BASE) % FINAL_COUNT)
}

/// Returns whether `c` ends in a trailing consonant, or `None` when `c` is
/// not a Hangul syllable.
pub fn has_final_consonant(c: char) -> Option<bool> {
    final_index(c).map(|index| index != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_bounds() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('a'));
        assert!(!is_syllable('ㄱ')); // compatibility jamo, not a syllable
    }

    #[test]
    fn test_final_consonant() {
        assert_eq!(has_final_consonant('과'), Some(false));
        assert_eq!(has_final_consonant('책'), Some(true));
        assert_eq!(has_final_consonant('힣'), Some(true));
        assert_eq!(has_final_consonant('7'), None);
    }

    #[test]
    fn test_final_index() {
        assert_eq!(final_index('가'), Some(0));
        // 한 = ㅎ + ㅏ + ㄴ(4)
        assert_eq!(final_index('한'), Some(4));
        assert_eq!(final_index('힣'), Some(27));
        assert_eq!(final_index('A'), None);
    }
}
