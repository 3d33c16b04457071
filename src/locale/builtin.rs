//! Built-in locale data.

/// Locale settings for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub default_template: &'static str,
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    /// Spring, summer, fall, winter.
    pub season_names: [&'static str; 4],
}

impl Default for Locale {
    fn default() -> Self {
        Self::ko_kr()
    }
}

impl Locale {
    /// Korean (South Korea) locale.
    pub fn ko_kr() -> Self {
        Locale {
            default_template: "YYYY년 MM월 DD일",
            day_names_short: ["일", "월", "화", "수", "목", "금", "토"],
            day_names_full: [
                "일요일",
                "월요일",
                "화요일",
                "수요일",
                "목요일",
                "금요일",
                "토요일",
            ],
            season_names: ["봄", "여름", "가을", "겨울"],
        }
    }
}
