use super::*;
use crate::brands::{FixedPick, SeededRandom};
use crate::concept::{ConceptComponents, PhotographyStyle, ReferenceImages};
use crate::config::Config;
use crate::sections::{AUTHENTIC_CAMERA, EDITORIAL_CAMERA, SectionLabel};
use crate::theme::Theme;
use crate::validate::WarningKind;

const CHRISTMAS_LOFT: &str = "Christmas morning scene, wearing a red Ganni sweater, cream wide-leg trousers, and white sneakers, sitting on a leather sofa in an industrial loft with exposed brick walls, a minimalist Christmas tree with string lights, warm contrast lighting.";

const BALCONY_COFFEE: &str = "Standing on a sunny balcony with a cup of coffee, golden hour light.";

fn christmas_request(index: usize) -> PromptRequest {
    PromptRequest::new(ConceptComponents::new("Holiday morning", CHRISTMAS_LOFT))
        .with_category("SEASONAL_CHRISTMAS")
        .with_reference_images(ReferenceImages::new(["face-1.jpg", "face-2.jpg"]))
        .with_item_index(index)
}

fn build(request: &PromptRequest) -> ProModePrompt {
    PromptAssembler::default().build(request, &mut FixedPick(0))
}

fn body(prompt: &ProModePrompt, label: SectionLabel) -> String {
    prompt.section(label).map(|s| s.body.clone()).unwrap_or_default()
}

// =========================================================================
// End-to-end scenarios
// =========================================================================

#[test]
fn test_christmas_loft_editorial() {
    let prompt = build(&christmas_request(0));

    assert_eq!(prompt.category, "SEASONAL_CHRISTMAS");
    assert_eq!(prompt.style, PhotographyStyle::Editorial);
    assert_eq!(prompt.theme, Theme::Christmas);

    let outfit = body(&prompt, SectionLabel::Outfit);
    assert!(outfit.contains("Ganni"));
    assert!(outfit.contains("trousers"));
    assert!(outfit.contains("sneakers"));

    let setting = body(&prompt, SectionLabel::Setting);
    assert!(setting.contains("exposed brick"));
    assert!(setting.contains("Christmas tree"));

    assert_eq!(body(&prompt, SectionLabel::Camera), EDITORIAL_CAMERA);
    assert!(body(&prompt, SectionLabel::Mood).contains("Festive"));

    let result = prompt.validate(&Config::default());
    assert!(!result.has(WarningKind::Contradiction));
    assert!(result.valid, "unexpected warnings: {:?}", result.warnings);
}

#[test]
fn test_christmas_loft_authentic_for_later_items() {
    let prompt = build(&christmas_request(4));

    assert_eq!(prompt.style, PhotographyStyle::Authentic);
    assert_eq!(body(&prompt, SectionLabel::Camera), AUTHENTIC_CAMERA);
    assert!(prompt.full_prompt.contains("iPhone"));
    assert!(prompt.full_prompt.contains("portrait mode"));
    assert!(!prompt.full_prompt.contains("Canon"));
    assert!(!prompt.full_prompt.contains("mm prime"));

    let result = prompt.validate(&Config::default());
    assert!(!result.has(WarningKind::Contradiction));
}

#[test]
fn test_description_without_outfit() {
    let request = PromptRequest::new(ConceptComponents::new("Balcony", BALCONY_COFFEE));
    let prompt = build(&request);

    assert!(prompt.scene.outfit_items.is_empty());
    let outfit = body(&prompt, SectionLabel::Outfit);
    assert!(outfit.starts_with("Effortless, well-fitted pieces from"));
    for brand in &prompt.brands.accessible {
        assert!(outfit.contains(brand.as_str()));
    }

    let result = prompt.validate(&Config::default());
    assert!(!result.has(WarningKind::MissingOutfitItem));
}

// =========================================================================
// Output shape
// =========================================================================

#[test]
fn test_full_prompt_layout() {
    let prompt = build(&christmas_request(0));
    let paragraphs: Vec<&str> = prompt.full_prompt.split("\n\n").collect();

    assert_eq!(
        paragraphs[0],
        introduction(PhotographyStyle::Editorial, true)
    );
    let labels: Vec<&str> = paragraphs[1..]
        .iter()
        .map(|p| p.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        labels,
        vec!["Outfit", "Pose", "Setting", "Lighting", "Camera", "Mood", "Avoid"]
    );
}

#[test]
fn test_negative_section_can_be_disabled() {
    let config = Config {
        include_negative_instructions: false,
        ..Default::default()
    };
    let prompt = PromptAssembler::new(config).build(&christmas_request(0), &mut FixedPick(0));
    assert!(prompt.section(SectionLabel::Avoid).is_none());
    assert!(!prompt.full_prompt.contains("Avoid:"));
}

#[test]
fn test_introduction_variants() {
    let variants = [
        introduction(PhotographyStyle::Editorial, true),
        introduction(PhotographyStyle::Authentic, true),
        introduction(PhotographyStyle::Editorial, false),
        introduction(PhotographyStyle::Authentic, false),
    ];
    for (i, a) in variants.iter().enumerate() {
        assert!(!a.contains("iPhone") && !a.contains("Canon") && !a.contains("portrait mode"));
        for b in &variants[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(variants[0].contains("reference images"));
    assert!(!variants[2].contains("reference images"));
}

#[test]
fn test_no_reference_images_intro() {
    let request = PromptRequest::new(ConceptComponents::new("Loft", CHRISTMAS_LOFT));
    let prompt = build(&request);
    assert!(
        prompt
            .full_prompt
            .starts_with(introduction(PhotographyStyle::Authentic, false))
    );
}

#[test]
fn test_architecture_matches_selection() {
    let request = christmas_request(0).with_user_request("make it feel elevated");
    let prompt = build(&request);
    let architecture = &prompt.architecture;

    assert_eq!(architecture.outfit.accessible_brands, prompt.brands.accessible);
    assert_eq!(architecture.outfit.luxury_accent, prompt.brands.luxury);
    assert!(architecture.outfit.luxury_accent.is_some());
    assert_eq!(architecture.outfit.mixed_brand_rule, "one-luxury-hero-max");
    assert_eq!(
        architecture.camera.photography_style,
        PhotographyStyle::Editorial
    );
    assert_eq!(architecture.mood.keywords, vec!["festive", "cozy", "warm"]);
    assert!(!architecture.negative_instructions.is_empty());
    assert!(architecture.environment.setting.contains("exposed brick"));
}

// =========================================================================
// Resolution rules
// =========================================================================

#[test]
fn test_batch_index_split() {
    let assembler = PromptAssembler::default();
    for index in 0..3 {
        let request = christmas_request(index).with_style(PhotographyStyle::Authentic);
        assert_eq!(
            assembler.resolve_style(&request),
            PhotographyStyle::Editorial,
            "index {}",
            index
        );
    }
    for index in [3, 4, 10] {
        let request = christmas_request(index).with_style(PhotographyStyle::Editorial);
        assert_eq!(
            assembler.resolve_style(&request),
            PhotographyStyle::Authentic,
            "index {}",
            index
        );
    }
}

#[test]
fn test_style_without_index() {
    let assembler = PromptAssembler::default();
    let concept = ConceptComponents::new("t", "d");

    let explicit = PromptRequest::new(concept.clone()).with_style(PhotographyStyle::Editorial);
    assert_eq!(assembler.resolve_style(&explicit), PhotographyStyle::Editorial);

    let default = PromptRequest::new(concept);
    assert_eq!(assembler.resolve_style(&default), PhotographyStyle::Authentic);
}

#[test]
fn test_category_resolution_order() {
    let assembler = PromptAssembler::default();
    let concept = ConceptComponents::new("t", "d").with_category("wellness");

    let explicit = PromptRequest::new(concept.clone()).with_category("luxury");
    assert_eq!(assembler.resolve_category(&explicit), "LUXURY");

    let from_concept = PromptRequest::new(concept);
    assert_eq!(assembler.resolve_category(&from_concept), "WELLNESS");

    let fallback = PromptRequest::new(ConceptComponents::new("t", "d"));
    assert_eq!(assembler.resolve_category(&fallback), "LIFESTYLE");

    let blank = PromptRequest::new(ConceptComponents::new("t", "d")).with_category("  ");
    assert_eq!(assembler.resolve_category(&blank), "LIFESTYLE");
}

#[test]
fn test_unknown_category_still_builds() {
    let request = PromptRequest::new(ConceptComponents::new("Pets", "sitting with a dog"))
        .with_category("pet_care");
    let prompt = build(&request);
    assert_eq!(prompt.category, "PET_CARE");
    assert!(!prompt.full_prompt.is_empty());
}

// =========================================================================
// Determinism and batches
// =========================================================================

#[test]
fn test_identical_inputs_identical_prompt() {
    let request = christmas_request(1);
    assert_eq!(build(&request).full_prompt, build(&request).full_prompt);

    let assembler = PromptAssembler::default();
    let a = assembler.build(&request, &mut SeededRandom::new(42));
    let b = assembler.build(&request, &mut SeededRandom::new(42));
    assert_eq!(a.full_prompt, b.full_prompt);
}

#[test]
fn test_build_batch_rotates_style() {
    let concepts: Vec<ConceptComponents> = (0..5)
        .map(|i| ConceptComponents::new(format!("Look {}", i), CHRISTMAS_LOFT))
        .collect();
    let prompts = PromptAssembler::default().build_batch(
        &concepts,
        &ReferenceImages::default(),
        None,
        &mut FixedPick(0),
    );

    let styles: Vec<PhotographyStyle> = prompts.iter().map(|p| p.style).collect();
    assert_eq!(
        styles,
        vec![
            PhotographyStyle::Editorial,
            PhotographyStyle::Editorial,
            PhotographyStyle::Editorial,
            PhotographyStyle::Authentic,
            PhotographyStyle::Authentic,
        ]
    );
}

#[test]
fn test_build_pro_mode_prompt_defaults() {
    let request = PromptRequest::new(ConceptComponents::new("Loft", CHRISTMAS_LOFT));
    let prompt = build_pro_mode_prompt(&request);
    assert_eq!(prompt.category, "LIFESTYLE");
    assert!((1..=2).contains(&prompt.brands.accessible.len()));
}

#[test]
fn test_brand_references_feed_outfit_fallback() {
    let mut concept = ConceptComponents::new("Balcony", BALCONY_COFFEE);
    concept.brand_references = vec!["sezane".to_string(), "Khaite".to_string()];
    let prompt = build(&PromptRequest::new(concept));

    assert_eq!(prompt.brands.accessible.len(), 2);
    assert_eq!(prompt.brands.accessible[0], "Sezane");
    assert_eq!(prompt.brands.luxury.as_deref(), Some("Khaite"));

    let outfit = body(&prompt, SectionLabel::Outfit);
    assert!(outfit.contains("from Sezane and"), "{outfit}");
    assert!(outfit.contains("a single Khaite accent piece"), "{outfit}");
}
