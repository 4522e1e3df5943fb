//! Inputs shared by every section builder.

use crate::brands::BrandSelection;
use crate::category::CategoryDefaults;
use crate::concept::{ConceptComponents, PhotographyStyle};
use crate::scene::SceneElements;

/// Everything a section builder may read. Builders never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub scene: &'a SceneElements,
    pub concept: &'a ConceptComponents,
    pub style: PhotographyStyle,
    pub defaults: &'static CategoryDefaults,
    pub brands: &'a BrandSelection,
}
