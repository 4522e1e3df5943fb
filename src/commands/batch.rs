//! Implementation of the `promode batch` command.

use super::{enforce_strict, print_json, random_source};
use crate::cli::BatchArgs;
use promode::concept::{ConceptComponents, ReferenceImages};
use promode::config::Config;
use promode::error::{PromodeError, Result};
use promode::prompt::{ProModePrompt, PromptAssembler};
use promode::validate::PromptValidationResult;
use serde::Serialize;

#[derive(Serialize)]
struct BatchItem<'a> {
    index: usize,
    prompt: &'a ProModePrompt,
    validation: &'a PromptValidationResult,
}

/// Execute the `promode batch` command.
pub fn cmd_batch(config: &Config, args: BatchArgs) -> Result<()> {
    let concepts = ConceptComponents::load_many(&args.concepts)?;
    if concepts.is_empty() {
        return Err(PromodeError::UserError(format!(
            "no concepts found in '{}'",
            args.concepts.display()
        )));
    }

    let assembler = PromptAssembler::new(config.clone());
    let references = ReferenceImages::new(args.common.reference_images.clone());
    let mut rng = random_source(args.common.seed);
    let prompts = assembler.build_batch(
        &concepts,
        &references,
        args.common.user_request.as_deref(),
        rng.as_mut(),
    );
    let validations: Vec<PromptValidationResult> =
        prompts.iter().map(|p| p.validate(config)).collect();

    tracing::info!(count = prompts.len(), "built batch");

    if args.common.json {
        let items: Vec<BatchItem<'_>> = prompts
            .iter()
            .zip(&validations)
            .enumerate()
            .map(|(index, (prompt, validation))| BatchItem {
                index,
                prompt,
                validation,
            })
            .collect();
        print_json(&items)?;
    } else {
        for (index, ((prompt, validation), concept)) in
            prompts.iter().zip(&validations).zip(&concepts).enumerate()
        {
            if index > 0 {
                println!();
            }
            println!(
                "=== [{}] {} ({}, {}) ===",
                index, concept.title, prompt.style, prompt.category
            );
            println!("{}", prompt.full_prompt);
            if !validation.valid {
                eprint!("\n[{}] {}", index, validation.format_report());
            }
        }
    }

    let refs: Vec<&PromptValidationResult> = validations.iter().collect();
    enforce_strict(args.common.strict, &refs)
}
