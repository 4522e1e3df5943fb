//! The defaults bundle attached to each category.

use crate::concept::PhotographyStyle;

/// Defaults for one content category. All data is `'static`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDefaults {
    /// Normalized registry key (e.g. `SEASONAL_CHRISTMAS`).
    pub key: &'static str,
    /// Mood keywords describing the category's emotional register.
    pub mood_keywords: &'static [&'static str],
    /// One-line aesthetic direction.
    pub aesthetic: &'static str,
    /// Terms the category's imagery should steer away from.
    pub avoid_terms: &'static [&'static str],
    /// Setting used when the description names no location.
    pub environment: &'static str,
    pub color_story: &'static str,
    /// The category's usual lighting, reported in the prompt architecture.
    pub lighting: &'static str,
    /// What the frame should prioritize visually.
    pub visual_priority: &'static str,
    /// Camera style the category leans towards in the architecture summary.
    pub camera_style: PhotographyStyle,
    /// Category-specific negative instructions, applied before the universal ones.
    pub negative_instructions: &'static [&'static str],
}
