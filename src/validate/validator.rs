//! Core validation logic.

use super::patterns::CompiledPromptChecks;
use super::similarity::{sentence_similarity, split_sentences};
use super::types::{PromptValidationResult, ValidationWarning, WarningKind};
use crate::config::Config;
use crate::scene::SceneElements;
use crate::text::contains_ci;

const OUTFIT_LABEL: &str = "Outfit:";

/// Validate a prompt with the default similarity threshold.
///
/// # Example
///
/// ```
/// use promode::scene::SceneElements;
/// use promode::validate::validate_prompt;
///
/// let scene = SceneElements {
///     outfit_items: vec!["linen shirt".to_string()],
///     ..Default::default()
/// };
/// let result = validate_prompt("Outfit: A linen shirt.\n\nPose: Standing.", &scene);
/// assert!(result.valid);
/// ```
pub fn validate_prompt(prompt: &str, scene: &SceneElements) -> PromptValidationResult {
    validate_prompt_with_config(&Config::default(), prompt, scene)
}

/// Validate a prompt using the thresholds in `config`.
pub fn validate_prompt_with_config(
    config: &Config,
    prompt: &str,
    scene: &SceneElements,
) -> PromptValidationResult {
    let checks = CompiledPromptChecks;
    let mut warnings = Vec::new();

    check_truncation(&checks, prompt, &mut warnings);
    check_duplicates(prompt, config.similarity_threshold, &mut warnings);
    check_contradiction(&checks, prompt, &mut warnings);
    check_outfit_preserved(prompt, scene, &mut warnings);

    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "prompt validation raised warnings");
    }

    PromptValidationResult::from_warnings(warnings)
}

fn check_truncation(
    checks: &CompiledPromptChecks,
    prompt: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    for fragment in checks.truncated_fragments(prompt) {
        warnings.push(ValidationWarning::new(
            WarningKind::Truncation,
            format!("possible truncated word \"{}\"", fragment),
        ));
    }

    if checks.ends_abruptly(prompt) {
        warnings.push(ValidationWarning::new(
            WarningKind::Truncation,
            "prompt ends abruptly without terminal punctuation",
        ));
    }
}

fn check_duplicates(prompt: &str, threshold: f64, warnings: &mut Vec<ValidationWarning>) {
    let sentences = split_sentences(prompt);

    for (i, first) in sentences.iter().enumerate() {
        for second in &sentences[i + 1..] {
            let similarity = sentence_similarity(first, second);
            if similarity > threshold {
                warnings.push(ValidationWarning::new(
                    WarningKind::DuplicateSentence,
                    format!(
                        "near-duplicate sentences ({:.0}% overlap): \"{}\" / \"{}\"",
                        similarity * 100.0,
                        first,
                        second
                    ),
                ));
            }
        }
    }
}

fn check_contradiction(
    checks: &CompiledPromptChecks,
    prompt: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    if let (Some(editorial), Some(phone)) =
        (checks.editorial_marker(prompt), checks.phone_marker(prompt))
    {
        warnings.push(ValidationWarning::new(
            WarningKind::Contradiction,
            format!(
                "prompt mixes editorial camera (\"{}\") and phone camera (\"{}\") terms",
                editorial, phone
            ),
        ));
    }
}

/// The Outfit section text: from `Outfit:` up to the next section label.
///
/// Empty when the prompt has no Outfit section.
pub fn outfit_section(prompt: &str) -> &str {
    let checks = CompiledPromptChecks;
    let Some(start) = prompt.find(OUTFIT_LABEL) else {
        return "";
    };
    let body_start = start + OUTFIT_LABEL.len();
    let end = checks
        .next_label(prompt, body_start)
        .unwrap_or(prompt.len());
    prompt[body_start..end].trim()
}

fn check_outfit_preserved(
    prompt: &str,
    scene: &SceneElements,
    warnings: &mut Vec<ValidationWarning>,
) {
    if scene.outfit_items.is_empty() {
        return;
    }

    let section = outfit_section(prompt);
    for item in &scene.outfit_items {
        if !contains_ci(section, item) {
            warnings.push(ValidationWarning::new(
                WarningKind::MissingOutfitItem,
                format!("outfit item \"{}\" is missing from the Outfit section", item),
            ));
        }
    }
}
