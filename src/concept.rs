//! Input data model: the concept handed to the engine by the upstream
//! content generator, the reference-image bundle, and the photography style.

use crate::error::{PromodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A structured content idea supplied for prompt building.
///
/// Only `description` drives scene extraction. The optional hints are used by
/// the section builders when extraction finds nothing for their section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptComponents {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aesthetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brand_references: Vec<String>,
}

impl ConceptComponents {
    /// Create a concept from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the concept's own category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the mood hint.
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Set the outfit hint.
    pub fn with_outfit(mut self, outfit: impl Into<String>) -> Self {
        self.outfit = Some(outfit.into());
        self
    }

    /// Parse a single concept from YAML (JSON is valid YAML).
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| PromodeError::UserError(format!("failed to parse concept: {}", e)))
    }

    /// Load a single concept from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_yaml(&read_input(path.as_ref())?)
    }

    /// Load a list of concepts from a YAML or JSON file.
    pub fn load_many<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let content = read_input(path.as_ref())?;
        serde_yaml::from_str(&content)
            .map_err(|e| PromodeError::UserError(format!("failed to parse concept list: {}", e)))
    }

    /// Text scanned for themes and luxury signals: title plus description.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Returns the trimmed hint, or `None` when absent or blank.
pub fn hint(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        PromodeError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Opaque reference-image bundle. Only its presence affects the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceImages {
    pub images: Vec<String>,
}

impl ReferenceImages {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// The two mutually exclusive camera presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhotographyStyle {
    /// Professional camera body and lens, magazine framing.
    Editorial,
    /// Phone camera in portrait mode, influencer framing.
    #[default]
    Authentic,
}

impl PhotographyStyle {
    /// Parse a style from a string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "editorial" => Some(Self::Editorial),
            "authentic" => Some(Self::Authentic),
            _ => None,
        }
    }
}

impl fmt::Display for PhotographyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotographyStyle::Editorial => write!(f, "editorial"),
            PhotographyStyle::Authentic => write!(f, "authentic"),
        }
    }
}
