//! Location extraction.
//!
//! Two independent patterns: a descriptive place phrase ("in an industrial
//! loft with exposed brick walls") and a furniture or surface phrase ("on a
//! leather sofa") that is recorded as a prop.

use super::vocabulary::{FURNITURE, LOCATION_ADJECTIVES, LOCATION_NOUNS};
use crate::text::tidy;
use regex::Regex;
use std::sync::LazyLock;

static DESCRIPTIVE_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:in|at|inside|within)\s+(?:a|an|the|her|his|their)\s+((?:{adj})(?:,?\s+(?:{adj}))*\s+(?:{noun}))\b(?:\s+with\s+([^,.;!?\n]+))?",
        adj = LOCATION_ADJECTIVES,
        noun = LOCATION_NOUNS,
    ))
    .expect("Invalid descriptive location regex")
});

static PLAIN_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:in|at|inside|within)\s+(?:a|an|the|her|his|their)\s+({noun})\b",
        noun = LOCATION_NOUNS,
    ))
    .expect("Invalid plain location regex")
});

static FURNITURE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:on|against|by|beside|near|across|at)\s+(?:a|an|the|her|his|their)\s+((?:[a-z]+[\s-]+){{0,2}}?(?:{furniture}))\b",
        furniture = FURNITURE,
    ))
    .expect("Invalid furniture regex")
});

/// Location pass result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMatch {
    /// Core place phrase, e.g. "industrial loft".
    pub location: String,
    /// Place phrase plus its "with ..." clause, e.g.
    /// "industrial loft with exposed brick walls".
    pub details: String,
}

/// Find the place the scene happens in.
///
/// A descriptive phrase (adjective + place noun) is preferred. Without one, a
/// bare place noun ("in the kitchen") is accepted.
pub fn extract_location(description: &str) -> Option<LocationMatch> {
    if let Some(caps) = DESCRIPTIVE_LOCATION.captures(description) {
        let location = tidy(caps.get(1).map(|m| m.as_str()).unwrap_or_default());
        let details = match caps.get(2) {
            Some(with) => format!("{} with {}", location, tidy(with.as_str())),
            None => location.clone(),
        };
        return Some(LocationMatch { location, details });
    }

    PLAIN_LOCATION
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            let location = m.as_str().to_lowercase();
            LocationMatch {
                details: location.clone(),
                location,
            }
        })
}

/// Find a furniture or surface phrase the subject is on or against.
pub fn extract_furniture(description: &str) -> Option<String> {
    FURNITURE_PHRASE
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| tidy(m.as_str()))
        .filter(|phrase| !phrase.is_empty())
}
