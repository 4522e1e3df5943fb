//! Camera section: one of two fixed, mutually exclusive templates.

use super::claims::ClaimedSpans;
use super::context::SectionContext;
use super::labels::{Section, SectionLabel};
use crate::concept::PhotographyStyle;

/// Professional camera body and lens, magazine framing.
pub const EDITORIAL_CAMERA: &str = "Shot on a Canon EOS R5 with an RF 85mm prime lens at f/2 to f/4, photographer positioned 2 meters from the subject. Symmetrical editorial framing from mid-thigh up, sharp focus on the eyes with a softly separated background.";

/// Phone camera in portrait mode, influencer framing.
pub const AUTHENTIC_CAMERA: &str = "Shot on an iPhone 15 Pro in portrait mode with soft natural bokeh, phone held about 1 meter from the subject. Influencer-style selfie framing at eye level, true-to-life color and a hint of natural grain.";

/// The camera template for a style.
pub fn camera_template(style: PhotographyStyle) -> &'static str {
    match style {
        PhotographyStyle::Editorial => EDITORIAL_CAMERA,
        PhotographyStyle::Authentic => AUTHENTIC_CAMERA,
    }
}

/// Build the Camera section.
pub fn build_camera(ctx: &SectionContext<'_>, claims: &mut ClaimedSpans) -> Section {
    let template = camera_template(ctx.style);
    claims.claim(template);
    Section::new(SectionLabel::Camera, template)
}
