//! Prompt assembly.
//!
//! The assembler is the only entry point that runs the whole pipeline:
//!
//! 1. Resolve category, photography style and theme
//! 2. Select brands for the category and theme
//! 3. Extract the scene from the description, once
//! 4. Run the section builders against that one scene
//! 5. Join the introduction and sections into the final prompt
//!
//! Assembly is synchronous, allocation-only and never fails. Validation is a
//! separate step; see [`crate::validate`].

mod architecture;
mod assembler;
mod intro;
mod request;

#[cfg(test)]
mod tests;

pub use architecture::{
    CameraDetails, EnvironmentDetails, MoodDetails, OutfitDetails, PromptArchitecture,
};
pub use assembler::{ProModePrompt, PromptAssembler, build_pro_mode_prompt};
pub use intro::introduction;
pub use request::PromptRequest;
