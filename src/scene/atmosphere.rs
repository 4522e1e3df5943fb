//! Lighting, mood, vibe, season and time-of-day captures.
//!
//! Each is a single pattern against a fixed vocabulary; the first match wins.

use crate::text::tidy;
use regex::Regex;
use std::sync::LazyLock;

static LIGHTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:(?:soft|warm|golden|natural|diffused|dramatic|moody|bright|cool|gentle|morning|evening|afternoon|golden-hour|window|candle|ambient|contrast|low|dim|studio|backlit|dappled|overcast|sunset|sunrise|neon|cinematic|hour|late|early|muted|filtered|crisp|glowing)\s+){1,3}(?:light|lighting|glow|sunlight|daylight)|golden hour|candlelight|sunlight|daylight)\b",
    )
    .expect("Invalid lighting regex")
});

static MOOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(cozy|cosy|relaxed|serene|confident|joyful|playful|calm|peaceful|romantic|energetic|dreamy|moody|intimate|festive|elegant|effortless|carefree|contemplative|empowered|nostalgic|whimsical|tranquil|radiant|glamorous)\b",
    )
    .expect("Invalid mood regex")
});

static VIBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b([a-z]+(?:[\s-][a-z]+)?)\s+(?:vibes?|energy|atmosphere|ambiance|ambience)\b",
    )
    .expect("Invalid vibe regex")
});

static VIBE_LEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:a|an|the|with|of|and)\s+").expect("Invalid vibe leader regex")
});

static SEASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(christmas|xmas|holiday season|holidays|winter|snowy|snow|summer|spring|autumn|fall foliage|halloween|valentine'?s?)\b",
    )
    .expect("Invalid season regex")
});

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(morning|sunrise|dawn|afternoon|golden hour|sunset|evening|dusk|night|midnight)\b")
        .expect("Invalid time of day regex")
});

/// Lighting phrase, e.g. "warm contrast lighting".
pub fn extract_lighting(description: &str) -> Option<String> {
    LIGHTING
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| tidy(m.as_str()))
}

/// Single mood word, lowercased.
pub fn extract_mood(description: &str) -> Option<String> {
    MOOD.captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// The words qualifying "vibe", "energy", "atmosphere" and similar.
pub fn extract_vibe(description: &str) -> Option<String> {
    let caps = VIBE.captures(description)?;
    let raw = caps.get(1)?.as_str();
    let vibe = VIBE_LEADER.replace(raw, "").trim().to_lowercase();
    (!vibe.is_empty()).then_some(vibe)
}

/// Normalized season name.
pub fn extract_season(description: &str) -> Option<String> {
    let caps = SEASON.captures(description)?;
    let raw = caps.get(1)?.as_str().to_lowercase();
    let season = match raw.as_str() {
        "christmas" | "xmas" | "holiday season" | "holidays" => "christmas",
        "winter" | "snowy" | "snow" => "winter",
        "summer" => "summer",
        "spring" => "spring",
        "autumn" | "fall foliage" => "autumn",
        "halloween" => "halloween",
        _ => "valentines",
    };
    Some(season.to_string())
}

/// Normalized time of day: morning, afternoon, evening or night.
pub fn extract_time_of_day(description: &str) -> Option<String> {
    let caps = TIME_OF_DAY.captures(description)?;
    let raw = caps.get(1)?.as_str().to_lowercase();
    let time = match raw.as_str() {
        "morning" | "sunrise" | "dawn" => "morning",
        "afternoon" => "afternoon",
        "night" | "midnight" => "night",
        _ => "evening",
    };
    Some(time.to_string())
}
