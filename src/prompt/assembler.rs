//! The prompt assembler.

use super::architecture::{
    CameraDetails, EnvironmentDetails, MoodDetails, OutfitDetails, PromptArchitecture,
};
use super::intro::introduction;
use super::request::PromptRequest;
use crate::brands::{BrandSelection, OsRandom, RandomSource, select_brands};
use crate::category::{CategoryDefaults, category_defaults, normalize_category_key};
use crate::concept::{ConceptComponents, PhotographyStyle, ReferenceImages, hint};
use crate::config::Config;
use crate::scene::{SceneElements, extract_scene};
use crate::sections::{
    Section, SectionContext, SectionLabel, build_negative, build_sections, mood_keywords,
    negative_instructions,
};
use crate::theme::{Theme, detect_theme};
use crate::validate::{PromptValidationResult, validate_prompt_with_config};
use serde::Serialize;

/// Separator between the introduction and each section.
const SECTION_SEPARATOR: &str = "\n\n";

/// A fully assembled prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ProModePrompt {
    /// The text handed to the image model.
    pub full_prompt: String,
    /// Resolved, normalized category key.
    pub category: String,
    pub style: PhotographyStyle,
    pub theme: Theme,
    pub brands: BrandSelection,
    pub scene: SceneElements,
    pub sections: Vec<Section>,
    pub architecture: PromptArchitecture,
}

impl ProModePrompt {
    /// The section with `label`, if it was emitted.
    pub fn section(&self, label: SectionLabel) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Run the advisory validator over this prompt.
    pub fn validate(&self, config: &Config) -> PromptValidationResult {
        validate_prompt_with_config(config, &self.full_prompt, &self.scene)
    }
}

/// Assembles prompts under one configuration.
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    config: Config,
}

impl PromptAssembler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the photography style.
    ///
    /// A batch index wins: the first `editorial_batch_size` items are
    /// editorial and the rest authentic. Without an index, an explicit style
    /// is used, then the configured default.
    pub fn resolve_style(&self, request: &PromptRequest) -> PhotographyStyle {
        match request.item_index {
            Some(index) if index < self.config.editorial_batch_size => PhotographyStyle::Editorial,
            Some(_) => PhotographyStyle::Authentic,
            None => request.style.unwrap_or(self.config.default_style),
        }
    }

    /// Resolve the category key: explicit, then the concept's, then the
    /// configured default.
    pub fn resolve_category(&self, request: &PromptRequest) -> String {
        let raw = hint(&request.category)
            .or_else(|| hint(&request.concept.category))
            .unwrap_or(self.config.default_category.as_str());
        normalize_category_key(raw)
    }

    /// Build one prompt.
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        request: &PromptRequest,
        rng: &mut R,
    ) -> ProModePrompt {
        let category = self.resolve_category(request);
        let style = self.resolve_style(request);
        let defaults = category_defaults(&category);
        let theme = detect_theme(&request.concept.searchable_text());
        let brands = select_brands(&category, theme, request.user_request.as_deref(), rng)
            .with_references(&request.concept.brand_references);

        let scene = extract_scene(&request.concept.description);

        let ctx = SectionContext {
            scene: &scene,
            concept: &request.concept,
            style,
            defaults,
            brands: &brands,
        };
        let mut sections = build_sections(&ctx);
        if self.config.include_negative_instructions {
            sections.push(build_negative(defaults));
        }

        let intro = introduction(style, !request.reference_images.is_empty());
        let full_prompt = std::iter::once(intro.to_string())
            .chain(
                sections
                    .iter()
                    .filter(|section| !section.is_empty())
                    .map(ToString::to_string),
            )
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR);

        let architecture = describe(&ctx, &sections);

        tracing::debug!(
            category = %category,
            style = %style,
            theme = %theme,
            item_index = ?request.item_index,
            length = full_prompt.len(),
            "assembled prompt"
        );

        ProModePrompt {
            full_prompt,
            category,
            style,
            theme,
            brands,
            scene,
            sections,
            architecture,
        }
    }

    /// Build one prompt per concept, using each position as the item index.
    pub fn build_batch<R: RandomSource + ?Sized>(
        &self,
        concepts: &[ConceptComponents],
        reference_images: &ReferenceImages,
        user_request: Option<&str>,
        rng: &mut R,
    ) -> Vec<ProModePrompt> {
        concepts
            .iter()
            .enumerate()
            .map(|(index, concept)| {
                let mut request = PromptRequest::new(concept.clone())
                    .with_reference_images(reference_images.clone())
                    .with_item_index(index);
                request.user_request = user_request.map(str::to_string);
                self.build(&request, rng)
            })
            .collect()
    }
}

/// Build a prompt with the default configuration and OS randomness.
pub fn build_pro_mode_prompt(request: &PromptRequest) -> ProModePrompt {
    PromptAssembler::default().build(request, &mut OsRandom)
}

fn section_body(sections: &[Section], label: SectionLabel) -> String {
    sections
        .iter()
        .find(|s| s.label == label)
        .map(|s| s.body.clone())
        .unwrap_or_default()
}

fn describe(ctx: &SectionContext<'_>, sections: &[Section]) -> PromptArchitecture {
    let defaults: &CategoryDefaults = ctx.defaults;

    let mut keywords = mood_keywords(ctx.scene, ctx.concept);
    if keywords.is_empty() {
        keywords = defaults.mood_keywords.iter().map(|k| k.to_string()).collect();
    }
    let atmosphere = if ctx.scene.vibe.is_empty() {
        keywords.join(", ")
    } else {
        ctx.scene.vibe.clone()
    };

    PromptArchitecture {
        subject_and_pose: section_body(sections, SectionLabel::Pose),
        outfit: OutfitDetails::new(section_body(sections, SectionLabel::Outfit), ctx.brands),
        mood: MoodDetails {
            aesthetic: hint(&ctx.concept.aesthetic)
                .unwrap_or(defaults.aesthetic)
                .to_string(),
            avoid_terms: defaults.avoid_terms.iter().map(|t| t.to_string()).collect(),
            keywords,
        },
        environment: EnvironmentDetails {
            setting: section_body(sections, SectionLabel::Setting),
            color_story: defaults.color_story.to_string(),
            atmosphere,
            visual_priority: defaults.visual_priority.to_string(),
        },
        camera: CameraDetails::new(
            ctx.style,
            section_body(sections, SectionLabel::Lighting),
            defaults,
        ),
        negative_instructions: negative_instructions(defaults),
    }
}
