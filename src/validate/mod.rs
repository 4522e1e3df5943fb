//! Advisory validation of assembled prompts.
//!
//! The validator lints a finished prompt for artifacts the upstream text
//! generator is known to produce:
//! - Truncation: words cut mid-way, or text that stops without punctuation
//! - Duplication: two sentences with near-identical wording
//! - Contradiction: professional-camera and phone-camera vocabulary together
//! - Outfit loss: a captured outfit item that is missing from the Outfit section
//!
//! Validation never fails and never modifies the prompt. Callers decide
//! whether warnings merit regenerating.

mod patterns;
mod similarity;
mod types;
mod validator;


// Re-export public API
pub use patterns::CompiledPromptChecks;
pub use similarity::{sentence_similarity, split_sentences};
pub use types::{PromptValidationResult, ValidationWarning, WarningKind};
pub use validator::{outfit_section, validate_prompt, validate_prompt_with_config};
