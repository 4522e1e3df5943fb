//! Section labels and the labeled paragraph type.

use serde::Serialize;
use std::fmt;

/// Labels of the paragraphs in an assembled prompt, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionLabel {
    Outfit,
    Pose,
    Setting,
    Lighting,
    Camera,
    Mood,
    Avoid,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 7] = [
        SectionLabel::Outfit,
        SectionLabel::Pose,
        SectionLabel::Setting,
        SectionLabel::Lighting,
        SectionLabel::Camera,
        SectionLabel::Mood,
        SectionLabel::Avoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Outfit => "Outfit",
            SectionLabel::Pose => "Pose",
            SectionLabel::Setting => "Setting",
            SectionLabel::Lighting => "Lighting",
            SectionLabel::Camera => "Camera",
            SectionLabel::Mood => "Mood",
            SectionLabel::Avoid => "Avoid",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One labeled paragraph: `"Label: body"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: SectionLabel,
    pub body: String,
}

impl Section {
    pub fn new(label: SectionLabel, body: impl Into<String>) -> Self {
        Self {
            label,
            body: body.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.body)
    }
}
