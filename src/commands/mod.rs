//! Command implementations for promode.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the small helpers they share.

mod batch;
mod build;
mod inspect;
mod validate_cmd;

use crate::cli::{Cli, Command};
use promode::brands::{OsRandom, RandomSource, SeededRandom};
use promode::concept::PhotographyStyle;
use promode::config::Config;
use promode::error::{PromodeError, Result};
use promode::logging::{effective_level, init_logging};
use promode::validate::PromptValidationResult;
use serde::Serialize;

/// Dispatch a command to its implementation.
///
/// Resolves the config and installs logging before running the command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    init_logging(effective_level(&config.log_level, cli.verbose));
    tracing::debug!(config = ?config, "resolved config");

    match cli.command {
        Command::Build(args) => build::cmd_build(&config, args),
        Command::Batch(args) => batch::cmd_batch(&config, args),
        Command::Scene(args) => inspect::cmd_scene(args),
        Command::Theme(args) => inspect::cmd_theme(args),
        Command::Brands(args) => inspect::cmd_brands(&config, args),
        Command::Validate(args) => validate_cmd::cmd_validate(&config, args),
    }
}

/// Seeded rotation when a seed is given, OS entropy otherwise.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(OsRandom),
    }
}

fn parse_style(value: Option<&str>) -> Result<Option<PhotographyStyle>> {
    value
        .map(|s| {
            PhotographyStyle::from_str(s).ok_or_else(|| {
                PromodeError::UserError(format!(
                    "invalid style '{}': expected 'editorial' or 'authentic'",
                    s
                ))
            })
        })
        .transpose()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PromodeError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Turn warnings into a validation failure when `--strict` is set.
fn enforce_strict(strict: bool, results: &[&PromptValidationResult]) -> Result<()> {
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();
    if strict && warnings > 0 {
        return Err(PromodeError::ValidationError(format!(
            "{} warning(s) reported",
            warnings
        )));
    }
    Ok(())
}
