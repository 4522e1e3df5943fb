//! Lighting section.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::hint;
use crate::text::{capitalize_first, contains_ci, ensure_terminal_punctuation};

/// Build the Lighting section.
pub fn build_lighting(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let scene = ctx.scene;

    let base = if !scene.lighting.is_empty() {
        scene.lighting.clone()
    } else if let Some(lighting) = hint(&ctx.concept.lighting) {
        lighting.to_string()
    } else {
        match scene.time_of_day.as_str() {
            "morning" => "soft morning light streaming in through the windows".to_string(),
            "evening" | "night" => "warm evening light with a gentle ambient glow".to_string(),
            _ => "natural window lighting with soft, flattering shadows".to_string(),
        }
    };

    let text = if !scene.vibe.is_empty() && !contains_ci(&base, &scene.vibe) {
        format!("{}, creating a {} atmosphere", base, scene.vibe)
    } else {
        base
    };

    claims.claim(&text);
    Section::new(
        SectionLabel::Lighting,
        ensure_terminal_punctuation(&capitalize_first(&text)),
    )
}
