//! Scene extraction from free-text concept descriptions.
//!
//! The upstream description is unreliable prose, often truncated. Extraction
//! is a set of independent, best-effort passes, one per field group:
//!
//! - **Outfit**: the phrase after "wearing", split into items, plus brands
//! - **Posture**: posture verb, the action phrase around it, and an activity
//! - **Location**: an adjective + place phrase, and furniture surfaces as props
//! - **Details**: architecture, decor and prop vocabularies
//! - **Atmosphere**: lighting, mood, vibe, season and time of day
//!
//! A pass that finds nothing leaves its fields empty. That is normal and the
//! section builders fall back gracefully.

mod atmosphere;
mod details;
mod extractor;
mod location;
mod outfit;
mod posture;
mod types;
pub(crate) mod vocabulary;

#[cfg(test)]
mod tests;

pub use atmosphere::{
    extract_lighting, extract_mood, extract_season, extract_time_of_day, extract_vibe,
};
pub use details::{extract_architecture, extract_decor, extract_props};
pub use extractor::extract_scene;
pub use location::{LocationMatch, extract_furniture, extract_location};
pub use outfit::{OutfitMatch, extract_outfit};
pub use posture::{extract_action, extract_activity, extract_posture};
pub use types::SceneElements;
