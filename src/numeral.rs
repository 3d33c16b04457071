//! Sino-Korean numerals
//!
//! Numbers are read in groups of four digits. Each group is spelled with the
//! digit words and the positional words 십/백/천, then followed by the large
//! unit of the group (만, 억, 조, 경). A leading 1 on a positional word is
//! silent: 10 is 십, 110 is 백십.

const DIGITS: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];
const POSITIONS: [&str; 4] = ["", "십", "백", "천"];

/// Large units for successive groups of four digits. 경 (10^16) is enough to
/// cover all of `u64`.
const UNITS: [&str; 5] = ["", "만", "억", "조", "경"];

const GROUP: u64 = 10_000;

/// Convert a non-negative integer to Sino-Korean numeral text.
///
/// # Examples
/// ```
/// use hangul_moment::number_to_korean;
///
/// assert_eq!(number_to_korean(0), "영");
/// assert_eq!(number_to_korean(1234), "천이백삼십사");
/// assert_eq!(number_to_korean(50_000), "오만");
/// ```
pub fn number_to_korean(n: u64) -> String {
    if n == 0 {
        return "영".to_string();
    }

    let mut groups = Vec::with_capacity(UNITS.len());
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % GROUP) as u32);
        rest /= GROUP;
    }

    let mut result = String::new();
    for (unit_index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // 만 alone, not 일만
        if !(group == 1 && unit_index == 1) {
            result.push_str(&format_group(group));
        }
        result.push_str(UNITS[unit_index]);
    }
    result
}

/// Spell a single group (1-9999) without its large unit.
fn format_group(group: u32) -> String {
    let mut result = String::new();
    for position in (0..POSITIONS.len()).rev() {
        let digit = (group / 10u32.pow(position as u32) % 10) as usize;
        if digit == 0 {
            continue;
        }
        if !(digit == 1 && position > 0) {
            result.push_str(DIGITS[digit]);
        }
        result.push_str(POSITIONS[position]);
    }
    result
}
