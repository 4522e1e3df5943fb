//! Pose section.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::hint;
use crate::scene::SceneElements;
use crate::text::{capitalize_first, contains_ci, ensure_terminal_punctuation, tidy};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

const FALLBACK_POSE: &str = "natural, relaxed posture with an easy, candid expression";

static DANGLING_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:in|at|on|with|inside|within|by|of|and|near)$")
        .expect("Invalid dangling tail regex")
});

/// Remove the location phrases from `text` so Pose does not repeat Setting.
///
/// The location strings come from free text, so they are regex-escaped
/// before being used in a pattern.
pub fn strip_location(text: &str, scene: &SceneElements) -> String {
    let mut result = text.to_string();

    for phrase in [&scene.location_details, &scene.location] {
        if phrase.trim().is_empty() {
            continue;
        }
        let phrase = phrase.trim();
        let pattern = format!(
            r"(?:\s*,)?\s*(?:\b(?:in|at|inside|within)\s+)?(?:\b(?:a|an|the|her|his|their)\s+)?{}{}{}",
            word_edge(phrase.chars().next()),
            regex::escape(phrase),
            word_edge(phrase.chars().last()),
        );
        result = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex.replace_all(&result, "").into_owned(),
            Err(_) => result.replace(phrase, ""),
        };
    }

    let mut tidied = tidy(&result);
    while DANGLING_TAIL.is_match(&tidied) {
        tidied = tidy(&DANGLING_TAIL.replace(&tidied, ""));
    }
    tidied
}

/// A word boundary when the phrase edge is a word character, so "bar" never
/// matches inside "barstool".
fn word_edge(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    }
}

/// Build the Pose section.
pub fn build_pose(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let scene = ctx.scene;

    let base = if !scene.action.is_empty() {
        scene.action.as_str()
    } else {
        scene.posture.as_str()
    };
    let mut text = strip_location(base, scene);

    if !scene.activity.is_empty() && !contains_ci(&text, &scene.activity) {
        text = if text.is_empty() {
            scene.activity.clone()
        } else {
            format!("{}, {}", text, scene.activity)
        };
    }

    if text.is_empty() {
        text = hint(&ctx.concept.pose)
            .unwrap_or(FALLBACK_POSE)
            .to_string();
    }

    if !scene.mood.is_empty() && !contains_ci(&text, &scene.mood) {
        text = format!("{}, with a {} expression", text, scene.mood);
    }

    claims.claim(&text);
    Section::new(
        SectionLabel::Pose,
        ensure_terminal_punctuation(&capitalize_first(&text)),
    )
}
