//! Implementation of the `promode validate` command.
//!
//! Lints a prompt that was built elsewhere. The prompt is never modified;
//! warnings are reported on stdout and, with `--strict`, turned into exit
//! code 2.
//!
//! # Steps
//!
//! 1. Read the prompt file
//! 2. Extract outfit items from `--description`, if given
//! 3. Run the validator with the configured thresholds
//! 4. Print the result

use super::{enforce_strict, print_json};
use crate::cli::ValidateArgs;
use promode::config::Config;
use promode::error::{PromodeError, Result};
use promode::scene::{SceneElements, extract_scene};
use promode::validate::{PromptValidationResult, validate_prompt_with_config};
use std::path::Path;


/// Execute the `promode validate` command.
pub fn cmd_validate(config: &Config, args: ValidateArgs) -> Result<()> {
    let result = validate_file(config, &args.prompt_file, args.description.as_deref())?;

    if args.json {
        print_json(&result)?;
    } else if result.valid {
        println!("Prompt validation passed");
    } else {
        print!("{}", result.format_report());
    }

    enforce_strict(args.strict, &[&result])
}

/// Validate the prompt stored at `path`.
fn validate_file(
    config: &Config,
    path: &Path,
    description: Option<&str>,
) -> Result<PromptValidationResult> {
    let prompt = std::fs::read_to_string(path).map_err(|e| {
        PromodeError::UserError(format!(
            "failed to read prompt file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let scene = description.map(extract_scene).unwrap_or_else(SceneElements::default);
    tracing::debug!(
        path = %path.display(),
        outfit_items = scene.outfit_items.len(),
        "validating prompt file"
    );

    Ok(validate_prompt_with_config(config, &prompt, &scene))
}
