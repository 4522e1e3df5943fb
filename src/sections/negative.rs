//! The `Avoid:` section of negative instructions.

use super::labels::{Section, SectionLabel};
use crate::category::{CategoryDefaults, UNIVERSAL_NEGATIVE_INSTRUCTIONS};
use crate::text::{capitalize_first, ensure_terminal_punctuation};

/// Category negatives followed by the universal ones, without repeats.
pub fn negative_instructions(defaults: &CategoryDefaults) -> Vec<String> {
    let mut instructions: Vec<String> = Vec::new();
    for instruction in defaults
        .negative_instructions
        .iter()
        .chain(UNIVERSAL_NEGATIVE_INSTRUCTIONS)
    {
        if !instructions.iter().any(|i| i.eq_ignore_ascii_case(instruction)) {
            instructions.push(instruction.to_string());
        }
    }
    instructions
}

/// Build the Avoid section.
pub fn build_negative(defaults: &CategoryDefaults) -> Section {
    let body = negative_instructions(defaults).join("; ");
    Section::new(
        SectionLabel::Avoid,
        ensure_terminal_punctuation(&capitalize_first(&body)),
    )
}
