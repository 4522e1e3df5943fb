//! Mood section.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::{ConceptComponents, hint};
use crate::scene::SceneElements;
use crate::text::{capitalize_first, ensure_terminal_punctuation};

const FALLBACK_MOOD: &str = "natural, authentic, sophisticated";

fn season_keywords(season: &str) -> &'static [&'static str] {
    match season {
        "christmas" => &["festive", "cozy", "warm"],
        "winter" => &["cozy", "crisp"],
        "summer" => &["sun-kissed", "carefree"],
        "spring" => &["fresh", "light"],
        "autumn" => &["warm", "grounded"],
        "halloween" => &["playful", "moody"],
        "valentines" => &["romantic", "soft"],
        _ => &[],
    }
}

/// Union of vibe, extracted mood, concept mood and season keywords,
/// deduplicated case-insensitively in that order.
pub fn mood_keywords(scene: &SceneElements, concept: &ConceptComponents) -> Vec<String> {
    let concept_moods = hint(&concept.mood)
        .map(|mood| mood.split(',').map(str::trim).collect::<Vec<_>>())
        .unwrap_or_default();

    let candidates = [scene.vibe.as_str(), scene.mood.as_str()]
        .into_iter()
        .chain(concept_moods)
        .chain(season_keywords(&scene.season).iter().copied());

    let mut keywords: Vec<String> = Vec::new();
    for candidate in candidates {
        let candidate = candidate.trim().to_lowercase();
        if !candidate.is_empty() && !keywords.contains(&candidate) {
            keywords.push(candidate);
        }
    }
    keywords
}

/// Build the Mood section.
pub fn build_mood(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let keywords = mood_keywords(ctx.scene, ctx.concept);

    let mut text = if keywords.is_empty() {
        FALLBACK_MOOD.to_string()
    } else {
        keywords.join(", ")
    };
    if let Some(aesthetic) = hint(&ctx.concept.aesthetic) {
        text.push_str(&format!(", with a {} aesthetic", aesthetic));
    }

    claims.claim(&text);
    Section::new(
        SectionLabel::Mood,
        ensure_terminal_punctuation(&capitalize_first(&text)),
    )
}
