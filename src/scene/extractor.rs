//! Composition of the individual passes into one `SceneElements`.

use super::atmosphere::{
    extract_lighting, extract_mood, extract_season, extract_time_of_day, extract_vibe,
};
use super::details::{extract_architecture, extract_decor, extract_props};
use super::location::{extract_furniture, extract_location};
use super::outfit::extract_outfit;
use super::posture::{extract_action, extract_activity, extract_posture};
use super::types::SceneElements;
use crate::text::dedupe_phrases;

/// Extract structured scene data from a free-text description.
///
/// Never fails: each pass is best-effort and leaves its fields empty when it
/// finds nothing.
pub fn extract_scene(description: &str) -> SceneElements {
    let mut scene = SceneElements::default();

    if let Some(outfit) = extract_outfit(description) {
        scene.outfit_complete = outfit.complete;
        scene.outfit_items = outfit.items;
        scene.outfit_brands = outfit.brands;
    }

    scene.posture = extract_posture(description).unwrap_or_default();
    scene.action = extract_action(description).unwrap_or_default();
    scene.activity = extract_activity(description)
        .filter(|activity| !scene.outfit_complete.contains(activity.as_str()))
        .unwrap_or_default();

    if let Some(location) = extract_location(description) {
        scene.location = location.location;
        scene.location_details = location.details;
    }

    let mut props = Vec::new();
    if let Some(furniture) = extract_furniture(description) {
        props.push(furniture);
    }
    props.extend(extract_props(description));
    scene.props = dedupe_phrases(props);
    scene.decor = extract_decor(description);
    scene.architecture = extract_architecture(description);

    scene.lighting = extract_lighting(description).unwrap_or_default();
    scene.mood = extract_mood(description).unwrap_or_default();
    scene.vibe = extract_vibe(description).unwrap_or_default();
    scene.season = extract_season(description).unwrap_or_default();
    scene.time_of_day = extract_time_of_day(description).unwrap_or_default();

    tracing::debug!(
        outfit_items = scene.outfit_items.len(),
        posture = %scene.posture,
        location = %scene.location,
        props = scene.props.len(),
        decor = scene.decor.len(),
        architecture = scene.architecture.len(),
        "extracted scene"
    );

    scene
}
