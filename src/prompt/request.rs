//! Builder for a single prompt request.

use crate::concept::{ConceptComponents, PhotographyStyle, ReferenceImages};

/// Inputs for one prompt build.
#[derive(Debug, Clone, Default)]
pub struct PromptRequest {
    pub concept: ConceptComponents,
    /// Explicit category; wins over `concept.category`.
    pub category: Option<String>,
    pub reference_images: ReferenceImages,
    /// The end user's free-text request, scanned for luxury signals.
    pub user_request: Option<String>,
    /// Explicit style; loses to `item_index`.
    pub style: Option<PhotographyStyle>,
    /// Position within a batch.
    pub item_index: Option<usize>,
}

impl PromptRequest {
    pub fn new(concept: ConceptComponents) -> Self {
        Self {
            concept,
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_reference_images(mut self, images: ReferenceImages) -> Self {
        self.reference_images = images;
        self
    }

    pub fn with_user_request(mut self, user_request: impl Into<String>) -> Self {
        self.user_request = Some(user_request.into());
        self
    }

    pub fn with_style(mut self, style: PhotographyStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_item_index(mut self, index: usize) -> Self {
        self.item_index = Some(index);
        self
    }
}
