//! The structured scene record.

use serde::Serialize;

/// Structured scene data extracted from one description.
///
/// Rebuilt on every prompt build and never persisted. Every field defaults
/// to empty; absence means the pass found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneElements {
    /// Posture phrase with its surroundings (e.g. "sitting on a leather sofa").
    pub action: String,
    /// Bare posture verb (e.g. "sitting").
    pub posture: String,
    /// What the subject is doing besides holding a posture (e.g. "sipping cocoa").
    pub activity: String,
    /// Core place phrase (e.g. "industrial loft").
    pub location: String,
    /// Place phrase with its trailing "with ..." details, if any.
    pub location_details: String,
    /// The full outfit phrase as written after "wearing".
    pub outfit_complete: String,
    /// Outfit split into items, in order.
    pub outfit_items: Vec<String>,
    /// Known brand names found in the outfit, deduplicated.
    pub outfit_brands: Vec<String>,
    pub props: Vec<String>,
    pub decor: Vec<String>,
    pub architecture: Vec<String>,
    pub mood: String,
    pub lighting: String,
    pub vibe: String,
    /// Normalized season: christmas, winter, summer, spring, autumn, halloween, valentines.
    pub season: String,
    /// Normalized time of day: morning, afternoon, evening, night.
    pub time_of_day: String,
}

impl SceneElements {
    /// Whether the extractor found an outfit.
    pub fn has_outfit(&self) -> bool {
        !self.outfit_complete.is_empty() || !self.outfit_items.is_empty()
    }

    /// The most specific location phrase available.
    pub fn location_phrase(&self) -> &str {
        if !self.location_details.is_empty() {
            &self.location_details
        } else {
            &self.location
        }
    }
}
