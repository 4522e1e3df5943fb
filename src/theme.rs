//! Theme detection over free text.
//!
//! Themes are checked in a fixed order and the first matching rule wins, so
//! "christmas at the beach" is a Christmas theme. Text that matches nothing is
//! `Lifestyle`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Fixed set of scene themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Christmas,
    Beach,
    Workout,
    Luxury,
    Travel,
    Cafe,
    Selfie,
    Casual,
    Lifestyle,
}

impl Theme {
    /// Lowercase theme name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Christmas => "christmas",
            Theme::Beach => "beach",
            Theme::Workout => "workout",
            Theme::Luxury => "luxury",
            Theme::Travel => "travel",
            Theme::Cafe => "cafe",
            Theme::Selfie => "selfie",
            Theme::Casual => "casual",
            Theme::Lifestyle => "lifestyle",
        }
    }

    /// Parse a theme name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        THEME_RULES
            .iter()
            .map(|(theme, _)| *theme)
            .chain(std::iter::once(Theme::Lifestyle))
            .find(|theme| theme.as_str() == s.trim().to_lowercase())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered theme rules. Order is significant: first match wins.
static THEME_RULES: LazyLock<Vec<(Theme, Regex)>> = LazyLock::new(|| {
    [
        (
            Theme::Christmas,
            r"(?i)\b(?:christmas|xmas|holiday season|holidays|festive|santa|mistletoe|gingerbread|advent)\b",
        ),
        (
            Theme::Beach,
            r"(?i)\b(?:beach|ocean|seaside|shoreline|coastal|bikini|swimsuit|swimwear|poolside|tropical)\b",
        ),
        (
            Theme::Workout,
            r"(?i)\b(?:workout|gym|yoga|pilates|fitness|training session|running|athleisure|exercise|reformer)\b",
        ),
        (
            Theme::Luxury,
            r"(?i)\b(?:luxury|luxurious|designer|five-star|penthouse|yacht|champagne|opulent|high-end)\b",
        ),
        (
            Theme::Travel,
            r"(?i)\b(?:travel|airport|vacation|trip|destination|wanderlust|passport|getaway|abroad)\b",
        ),
        (
            Theme::Cafe,
            r"(?i)\b(?:caf[eé]|coffee shop|coffee|latte|espresso|cappuccino|bakery|brunch|matcha)\b",
        ),
        (
            Theme::Selfie,
            r"(?i)\b(?:selfie|mirror|front camera|front-facing camera)\b",
        ),
        (
            Theme::Casual,
            r"(?i)\b(?:casual|everyday|weekend|errands|comfy|loungewear|laid-back)\b",
        ),
    ]
    .into_iter()
    .map(|(theme, pattern)| (theme, Regex::new(pattern).expect("Invalid theme regex")))
    .collect()
});

/// Classify text into a theme. Total and deterministic.
pub fn detect_theme(text: &str) -> Theme {
    THEME_RULES
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(theme, _)| *theme)
        .unwrap_or(Theme::Lifestyle)
}
