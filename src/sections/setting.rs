//! Setting section.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::hint;
use crate::text::{capitalize_first, contains_ci, ensure_terminal_punctuation, join_natural};

/// Build the Setting section.
///
/// Location first, then architecture, decor and props. A phrase already in
/// the location text or claimed by an earlier section is left out.
pub fn build_setting(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let scene = ctx.scene;

    let head = if !scene.location_phrase().is_empty() {
        scene.location_phrase().to_string()
    } else if let Some(setting) = hint(&ctx.concept.setting) {
        setting.to_string()
    } else if !scene.architecture.is_empty() {
        "a space".to_string()
    } else {
        ctx.defaults.environment.to_string()
    };

    let fresh = |items: &[String]| -> Vec<String> {
        items
            .iter()
            .filter(|item| !contains_ci(&head, item) && !claims.is_claimed(item))
            .cloned()
            .collect()
    };
    let architecture = fresh(&scene.architecture);
    let decor = fresh(&scene.decor);
    let props = fresh(&scene.props);

    let mut body = head.clone();
    if !architecture.is_empty() {
        body.push_str(&format!(" with {}", join_natural(&architecture)));
    }
    if !decor.is_empty() {
        body.push_str(&format!(", featuring {}", join_natural(&decor)));
    }
    if !props.is_empty() {
        body.push_str(&format!(", styled with {}", join_natural(&props)));
    }

    claims.claim(&body);
    Section::new(
        SectionLabel::Setting,
        ensure_terminal_punctuation(&capitalize_first(&body)),
    )
}
