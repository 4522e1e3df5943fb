//! Structured view of an assembled prompt.

use crate::brands::{BrandSelection, MIXED_BRAND_RULE};
use crate::category::CategoryDefaults;
use crate::concept::PhotographyStyle;
use serde::Serialize;

/// The structured record behind a prompt, for logging and downstream
/// bookkeeping. The prompt text itself is in
/// [`ProModePrompt::full_prompt`](super::ProModePrompt::full_prompt).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptArchitecture {
    pub subject_and_pose: String,
    pub outfit: OutfitDetails,
    pub mood: MoodDetails,
    pub environment: EnvironmentDetails,
    pub camera: CameraDetails,
    pub negative_instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitDetails {
    pub description: String,
    /// One or two brands.
    pub accessible_brands: Vec<String>,
    /// At most one brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luxury_accent: Option<String>,
    pub mixed_brand_rule: &'static str,
}

impl OutfitDetails {
    pub fn new(description: String, brands: &BrandSelection) -> Self {
        Self {
            description,
            accessible_brands: brands.accessible.clone(),
            luxury_accent: brands.luxury.clone(),
            mixed_brand_rule: MIXED_BRAND_RULE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodDetails {
    pub keywords: Vec<String>,
    pub aesthetic: String,
    pub avoid_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentDetails {
    pub setting: String,
    pub color_story: String,
    pub atmosphere: String,
    pub visual_priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraDetails {
    pub format: &'static str,
    /// The Lighting section as rendered.
    pub lighting: String,
    /// The category's usual lighting, for comparison.
    pub category_lighting: &'static str,
    pub depth_of_field: &'static str,
    pub photography_style: PhotographyStyle,
    /// The style the category leans towards; the resolved style may differ.
    pub category_style: PhotographyStyle,
}

impl CameraDetails {
    pub fn new(style: PhotographyStyle, lighting: String, defaults: &CategoryDefaults) -> Self {
        let (format, depth_of_field) = match style {
            PhotographyStyle::Editorial => (
                "Canon EOS R5 with RF 85mm prime lens",
                "f/2 to f/4 with a softly separated background",
            ),
            PhotographyStyle::Authentic => (
                "iPhone 15 Pro in portrait mode",
                "portrait-mode bokeh",
            ),
        };
        Self {
            format,
            lighting,
            category_lighting: defaults.lighting,
            depth_of_field,
            photography_style: style,
            category_style: defaults.camera_style,
        }
    }
}
