//! Implementation of the `promode build` command.

use super::{enforce_strict, parse_style, print_json, random_source};
use crate::cli::BuildArgs;
use promode::concept::{ConceptComponents, ReferenceImages};
use promode::config::Config;
use promode::error::{PromodeError, Result};
use promode::prompt::{ProModePrompt, PromptAssembler, PromptRequest};
use promode::validate::PromptValidationResult;
use serde::Serialize;

#[derive(Serialize)]
struct BuildOutput<'a> {
    prompt: &'a ProModePrompt,
    validation: &'a PromptValidationResult,
}

/// Execute the `promode build` command.
pub fn cmd_build(config: &Config, args: BuildArgs) -> Result<()> {
    let request = build_request(&args)?;

    let assembler = PromptAssembler::new(config.clone());
    let mut rng = random_source(args.common.seed);
    let prompt = assembler.build(&request, rng.as_mut());
    let validation = prompt.validate(config);

    if args.common.json {
        print_json(&BuildOutput {
            prompt: &prompt,
            validation: &validation,
        })?;
    } else {
        println!("{}", prompt.full_prompt);
        if !validation.valid {
            eprint!("\n{}", validation.format_report());
        }
    }

    enforce_strict(args.common.strict, &[&validation])
}

fn build_request(args: &BuildArgs) -> Result<PromptRequest> {
    let concept = match (&args.concept, &args.description) {
        (Some(path), _) => ConceptComponents::load(path)?,
        (None, Some(description)) => ConceptComponents::new(args.title.clone(), description.clone()),
        (None, None) => {
            return Err(PromodeError::UserError(
                "either --concept or --description is required".to_string(),
            ));
        }
    };

    let mut request = PromptRequest::new(concept)
        .with_reference_images(ReferenceImages::new(args.common.reference_images.clone()));
    request.category = args.category.clone();
    request.user_request = args.common.user_request.clone();
    request.style = parse_style(args.style.as_deref())?;
    request.item_index = args.item_index;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use promode::concept::PhotographyStyle;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> BuildArgs {
        let mut argv = vec!["promode", "build"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Build(args) => args,
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_request_from_inline_flags() {
        let args = parse(&[
            "--description",
            "sitting in a loft",
            "--title",
            "Loft",
            "--style",
            "editorial",
            "--user-request",
            "something chic",
        ]);
        let request = build_request(&args).unwrap();
        assert_eq!(request.concept.title, "Loft");
        assert_eq!(request.concept.description, "sitting in a loft");
        assert_eq!(request.style, Some(PhotographyStyle::Editorial));
        assert_eq!(request.user_request.as_deref(), Some("something chic"));
        assert!(request.reference_images.is_empty());
    }

    #[test]
    fn test_request_from_concept_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "title: Gym\ndescription: standing in a gym\ncategory: WELLNESS").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = parse(&["--concept", &path]);
        let request = build_request(&args).unwrap();
        assert_eq!(request.concept.title, "Gym");
        assert_eq!(request.concept.category.as_deref(), Some("WELLNESS"));
    }

    #[test]
    fn test_request_requires_description() {
        let args = parse(&[]);
        let err = build_request(&args).unwrap_err();
        assert!(err.to_string().contains("--description"));
    }

    #[test]
    fn test_request_rejects_unknown_style() {
        let args = parse(&["--description", "text", "--style", "film"]);
        assert!(build_request(&args).is_err());
    }
}
