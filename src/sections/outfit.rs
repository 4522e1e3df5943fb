//! Outfit section.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::hint;
use crate::text::{capitalize_first, ensure_terminal_punctuation, join_natural};

/// Build the Outfit section.
///
/// Prefers the full captured phrase over the item list, so the writer's own
/// wording (and every captured item) survives into the prompt.
pub fn build_outfit(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let scene = ctx.scene;

    let body = if !scene.outfit_complete.is_empty() {
        scene.outfit_complete.clone()
    } else if !scene.outfit_items.is_empty() {
        scene.outfit_items.join(", ")
    } else if let Some(outfit) = hint(&ctx.concept.outfit) {
        outfit.to_string()
    } else {
        brand_fallback(ctx)
    };

    claims.claim(&body);
    Section::new(
        SectionLabel::Outfit,
        ensure_terminal_punctuation(&capitalize_first(&body)),
    )
}

fn brand_fallback(ctx: &SectionContext<'_>) -> String {
    let mut text = format!(
        "effortless, well-fitted pieces from {} styled for the scene",
        join_natural(&ctx.brands.accessible)
    );
    if let Some(luxury) = &ctx.brands.luxury {
        text.push_str(&format!(", finished with a single {} accent piece", luxury));
    }
    text
}
