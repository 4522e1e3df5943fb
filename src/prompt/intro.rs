//! Introduction paragraph.
//!
//! The introduction tells the image model to keep the subject's identity and
//! change only the scene. It must not name any camera or phone, so it never
//! conflicts with the Camera section.

use crate::concept::PhotographyStyle;

const EDITORIAL_WITH_REFERENCES: &str = "Use the reference images as the identity source. Keep the person's face, features, skin tone and hair exactly as shown, and place them in a new, professionally styled editorial scene as described below.";

const AUTHENTIC_WITH_REFERENCES: &str = "Use the reference images as the identity source. Keep the person's face, features, skin tone and hair exactly as shown, and place them in a new, candid everyday moment as described below.";

const EDITORIAL_WITHOUT_REFERENCES: &str = "Create a professionally styled editorial image of one person in a new scene, keeping every detail described below.";

const AUTHENTIC_WITHOUT_REFERENCES: &str = "Create a candid, true-to-life image of one person in a new everyday moment, keeping every detail described below.";

/// Pick the introduction for a style and reference-image presence.
pub fn introduction(style: PhotographyStyle, has_references: bool) -> &'static str {
    match (style, has_references) {
        (PhotographyStyle::Editorial, true) => EDITORIAL_WITH_REFERENCES,
        (PhotographyStyle::Authentic, true) => AUTHENTIC_WITH_REFERENCES,
        (PhotographyStyle::Editorial, false) => EDITORIAL_WITHOUT_REFERENCES,
        (PhotographyStyle::Authentic, false) => AUTHENTIC_WITHOUT_REFERENCES,
    }
}
