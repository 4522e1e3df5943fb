//! Promode: prompt composition and validation for AI portrait generation.
//!
//! A concept (title, free-text description, optional hints) goes in; a
//! labeled, multi-section image prompt comes out. The pipeline runs in one
//! direction:
//!
//! ```text
//! ConceptComponents -> SceneElements -> Sections -> full prompt -> warnings
//! ```
//!
//! - [`scene`] parses the unreliable description into structured fields
//! - [`brands`], [`category`] and [`theme`] supply the business rules
//! - [`sections`] turns one scene into Outfit, Pose, Setting, Lighting,
//!   Camera and Mood paragraphs without repeating itself
//! - [`prompt`] runs the whole thing
//! - [`validate`] lints the result; it never blocks or rewrites it
//!
//! # Example
//!
//! ```
//! use promode::brands::FixedPick;
//! use promode::concept::ConceptComponents;
//! use promode::prompt::{PromptAssembler, PromptRequest};
//!
//! let concept = ConceptComponents::new(
//!     "Morning coffee",
//!     "wearing a cream knit sweater, sitting in a sunlit kitchen",
//! );
//! let prompt = PromptAssembler::default().build(&PromptRequest::new(concept), &mut FixedPick(0));
//! assert!(prompt.full_prompt.contains("Outfit: A cream knit sweater."));
//! ```

pub mod brands;
pub mod category;
pub mod concept;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod prompt;
pub mod scene;
pub mod sections;
pub mod text;
pub mod theme;
pub mod validate;

pub use concept::{ConceptComponents, PhotographyStyle, ReferenceImages};
pub use config::Config;
pub use error::{PromodeError, Result};
pub use prompt::{ProModePrompt, PromptAssembler, PromptRequest, build_pro_mode_prompt};
pub use scene::{SceneElements, extract_scene};
pub use validate::{PromptValidationResult, validate_prompt};
