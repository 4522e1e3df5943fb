//! CLI argument parsing for promode.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Promode: compose and lint AI portrait prompts from content concepts.
///
/// A concept description is parsed into scene elements, combined with
/// category defaults and a brand selection, and assembled into a labeled
/// prompt (Outfit, Pose, Setting, Lighting, Camera, Mood). The result is
/// checked for truncation, duplication and camera contradictions.
#[derive(Parser, Debug)]
#[command(name = "promode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./promode.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promode.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one prompt from a concept.
    ///
    /// The concept comes from a YAML/JSON file (--concept) or from inline
    /// --title/--description/--category flags.
    Build(BuildArgs),

    /// Build one prompt per concept in a list.
    ///
    /// The first items of the batch are shot editorial, the rest authentic.
    Batch(BatchArgs),

    /// Print the scene elements extracted from a description, as JSON.
    Scene(SceneArgs),

    /// Print the theme detected in a piece of text.
    Theme(ThemeArgs),

    /// Print a brand selection for a category and theme.
    Brands(BrandsArgs),

    /// Lint an existing prompt.
    ///
    /// Checks for truncated words, near-duplicate sentences, mixed camera
    /// vocabulary and, given the source description, missing outfit items.
    Validate(ValidateArgs),
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// YAML or JSON file holding one concept.
    #[arg(long, conflicts_with = "description")]
    pub concept: Option<PathBuf>,

    /// Concept description (free text).
    #[arg(short, long)]
    pub description: Option<String>,

    /// Concept title.
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Content category (e.g. LIFESTYLE, SEASONAL_CHRISTMAS).
    #[arg(short, long)]
    pub category: Option<String>,

    #[command(flatten)]
    pub common: CommonBuildArgs,

    /// Photography style (editorial, authentic).
    #[arg(short, long)]
    pub style: Option<String>,

    /// Position within a batch; selects the style.
    #[arg(long)]
    pub item_index: Option<usize>,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// YAML or JSON file holding a list of concepts.
    #[arg(long)]
    pub concepts: PathBuf,

    #[command(flatten)]
    pub common: CommonBuildArgs,
}

/// Options shared by `build` and `batch`.
#[derive(clap::Args, Debug)]
pub struct CommonBuildArgs {
    /// The end user's request, scanned for luxury signals.
    #[arg(short = 'u', long)]
    pub user_request: Option<String>,

    /// Reference image path or URL (repeatable).
    #[arg(long = "reference-image")]
    pub reference_images: Vec<String>,

    /// Seed for brand rotation; omit for random rotation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of the prompt text.
    #[arg(long)]
    pub json: bool,

    /// Exit with code 2 when validation reports warnings.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `scene` command.
#[derive(Parser, Debug)]
pub struct SceneArgs {
    /// Description to extract from.
    pub description: String,
}

/// Arguments for the `theme` command.
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Text to classify.
    pub text: String,
}

/// Arguments for the `brands` command.
#[derive(Parser, Debug)]
pub struct BrandsArgs {
    /// Content category (defaults to the configured category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Theme name; detected from --user-request when omitted.
    #[arg(long)]
    pub theme: Option<String>,

    /// The end user's request, scanned for luxury signals.
    #[arg(short = 'u', long)]
    pub user_request: Option<String>,

    /// Seed for brand rotation.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// File holding the prompt text.
    #[arg(long)]
    pub prompt_file: PathBuf,

    /// Source description; its outfit items must appear in the Outfit section.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with code 2 when validation reports warnings.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_inline() {
        let cli = Cli::try_parse_from([
            "promode",
            "build",
            "--description",
            "wearing a red sweater",
            "--category",
            "seasonal_christmas",
            "--reference-image",
            "a.jpg",
            "--reference-image",
            "b.jpg",
            "--item-index",
            "4",
            "--seed",
            "7",
            "--strict",
        ])
        .unwrap();
        if let Command::Build(args) = cli.command {
            assert_eq!(args.description.as_deref(), Some("wearing a red sweater"));
            assert_eq!(args.category.as_deref(), Some("seasonal_christmas"));
            assert_eq!(args.common.reference_images, vec!["a.jpg", "b.jpg"]);
            assert_eq!(args.item_index, Some(4));
            assert_eq!(args.common.seed, Some(7));
            assert!(args.common.strict);
            assert!(!args.common.json);
            assert_eq!(args.title, "");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn parse_build_concept_conflicts_with_description() {
        let result = Cli::try_parse_from([
            "promode",
            "build",
            "--concept",
            "concept.yaml",
            "--description",
            "text",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_batch() {
        let cli = Cli::try_parse_from(["promode", "batch", "--concepts", "list.yaml", "--json"])
            .unwrap();
        if let Command::Batch(args) = cli.command {
            assert_eq!(args.concepts, PathBuf::from("list.yaml"));
            assert!(args.common.json);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn parse_scene_and_theme() {
        let cli = Cli::try_parse_from(["promode", "scene", "sitting in a loft"]).unwrap();
        assert!(matches!(cli.command, Command::Scene(ref a) if a.description == "sitting in a loft"));

        let cli = Cli::try_parse_from(["promode", "theme", "beach day"]).unwrap();
        assert!(matches!(cli.command, Command::Theme(ref a) if a.text == "beach day"));
    }

    #[test]
    fn parse_brands() {
        let cli = Cli::try_parse_from([
            "promode", "brands", "--category", "LUXURY", "--theme", "cafe", "--seed", "3",
        ])
        .unwrap();
        if let Command::Brands(args) = cli.command {
            assert_eq!(args.category.as_deref(), Some("LUXURY"));
            assert_eq!(args.theme.as_deref(), Some("cafe"));
            assert_eq!(args.seed, Some(3));
            assert!(args.user_request.is_none());
        } else {
            panic!("Expected Brands command");
        }
    }

    #[test]
    fn parse_validate() {
        let cli = Cli::try_parse_from([
            "promode",
            "validate",
            "--prompt-file",
            "prompt.txt",
            "--description",
            "wearing jeans",
            "--strict",
        ])
        .unwrap();
        if let Command::Validate(args) = cli.command {
            assert_eq!(args.prompt_file, PathBuf::from("prompt.txt"));
            assert_eq!(args.description.as_deref(), Some("wearing jeans"));
            assert!(args.strict);
        } else {
            panic!("Expected Validate command");
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "promode", "theme", "gym", "-vv", "--config", "custom.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }
}
