//! Posture, action and activity extraction.

use super::vocabulary::POSTURES;
use crate::text::tidy;
use regex::Regex;
use std::sync::LazyLock;

static POSTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", POSTURES)).expect("Invalid posture regex")
});

static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b[^,.;!?\n]*", POSTURES)).expect("Invalid action regex")
});

static ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:reading|sipping|drinking|holding|opening|unwrapping|wrapping|decorating|journaling|typing|working|laughing|scrolling|pouring|baking|cooking|shopping|stirring|writing|hugging|smiling|looking|gazing|applying|brushing|flipping|packing|carrying)\b[^,.;!?\n]*",
    )
    .expect("Invalid activity regex")
});

/// First posture verb in the text, lowercased.
pub fn extract_posture(description: &str) -> Option<String> {
    POSTURE
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// The clause that starts at the first posture verb, up to punctuation.
pub fn extract_action(description: &str) -> Option<String> {
    ACTION
        .find(description)
        .map(|m| tidy(m.as_str()))
        .filter(|action| !action.is_empty())
}

/// The clause that starts at the first activity verb, up to punctuation.
pub fn extract_activity(description: &str) -> Option<String> {
    ACTIVITY
        .find(description)
        .map(|m| tidy(m.as_str()))
        .filter(|activity| !activity.is_empty())
}
