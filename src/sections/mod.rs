//! Section builders.
//!
//! Six builders (Outfit, Pose, Setting, Lighting, Camera, Mood) turn one
//! shared [`SceneElements`](crate::scene::SceneElements) into labeled
//! paragraphs. They run in a fixed order over a [`ClaimedSpans`] set: each
//! builder records the text it used, and later builders skip phrases that
//! are already claimed. That is how a prop mentioned in the Pose section is
//! kept out of the Setting section.
//!
//! Builders never fail. Missing scene data falls back to concept hints, then
//! to category defaults or generic text.

mod camera;
mod claims;
mod context;
mod labels;
mod lighting;
mod mood;
mod negative;
mod outfit;
mod pose;
mod setting;


pub use camera::{AUTHENTIC_CAMERA, EDITORIAL_CAMERA, build_camera, camera_template};
pub use claims::ClaimedSpans;
pub use context::SectionContext;
pub use labels::{Section, SectionLabel};
pub use lighting::build_lighting;
pub use mood::{build_mood, mood_keywords};
pub use negative::{build_negative, negative_instructions};
pub use outfit::build_outfit;
pub use pose::{build_pose, strip_location};
pub use setting::build_setting;

/// Run the six builders in order against one context.
pub fn build_sections(ctx: &SectionContext<'_>) -> Vec<Section> {
    let mut claims = ClaimedSpans::default();
    vec![
        build_outfit(ctx, &mut claims),
        build_pose(ctx, &mut claims),
        build_setting(ctx, &mut claims),
        build_lighting(ctx, &mut claims),
        build_camera(ctx, &mut claims),
        build_mood(ctx, &mut claims),
    ]
}
