//! Compiled heuristic patterns.
//!
//! The truncation fragments are tuned to artifacts observed from the
//! upstream text generator and will need retuning as it changes.

use regex::Regex;
use std::sync::LazyLock;

/// Word stems the upstream generator has been seen to cut off, when they
/// are followed by punctuation or the end of the text.
const TRUNCATED_FRAGMENTS: &[&str] = &[
    "wi",
    "wit",
    "th",
    "whi",
    "sneak",
    "sweat",
    "trous",
    "blaz",
    "cardig",
    "jewel",
    "accesso",
    "lightin",
    "backgroun",
    "beautifu",
    "natura",
    "sophisticat",
    "atmospher",
    "eleganc",
    "photogr",
    "portrai",
    "minimali",
    "comfortab",
    "gorgeou",
    "luxuriou",
];

static TRUNCATED_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({})(?:[.,;:!?]|\s*$)",
        TRUNCATED_FRAGMENTS.join("|")
    ))
    .expect("Invalid truncated fragment regex")
});

/// Text that ends on a letter, or on a connective word, has been cut short.
static ABRUPT_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\b(?:and|with|the|a|an|of|in|on|to|for)\s*|[a-z])$")
        .expect("Invalid abrupt ending regex")
});

static EDITORIAL_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:canon eos|sony a7|nikon z|leica|hasselblad|fujifilm gfx|dslr|mirrorless|rf \d+mm|\d+mm prime)\b",
    )
    .expect("Invalid editorial marker regex")
});

static PHONE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:iphone|pixel \d+|galaxy s\d+|portrait mode|phone held)\b")
        .expect("Invalid phone marker regex")
});

static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Outfit|Pose|Setting|Lighting|Camera|Mood|Avoid):")
        .expect("Invalid section label regex")
});

/// Handle to the compiled heuristic patterns.
///
/// The patterns are process-wide statics; this type gives the validator a
/// single place to query them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledPromptChecks;

impl CompiledPromptChecks {
    /// Known truncated fragments found in the text.
    pub fn truncated_fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        TRUNCATED_FRAGMENT
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Whether the text stops without terminal punctuation.
    pub fn ends_abruptly(&self, text: &str) -> bool {
        let trimmed = text.trim_end();
        !trimmed.is_empty() && ABRUPT_ENDING.is_match(trimmed)
    }

    /// First editorial camera marker in the text.
    pub fn editorial_marker<'t>(&self, text: &'t str) -> Option<&'t str> {
        EDITORIAL_MARKERS.find(text).map(|m| m.as_str())
    }

    /// First phone-camera marker in the text.
    pub fn phone_marker<'t>(&self, text: &'t str) -> Option<&'t str> {
        PHONE_MARKERS.find(text).map(|m| m.as_str())
    }

    /// Byte offset of the first section label at or after `from`.
    pub fn next_label(&self, text: &str, from: usize) -> Option<usize> {
        SECTION_LABEL.find_at(text, from).map(|m| m.start())
    }
}
