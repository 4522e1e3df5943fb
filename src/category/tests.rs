//! Tests for the category defaults registry.

use super::*;
use crate::concept::PhotographyStyle;

#[test]
fn test_required_categories_registered() {
    let keys: Vec<&str> = known_categories().collect();
    for required in [
        "WELLNESS",
        "LUXURY",
        "LIFESTYLE",
        "FASHION",
        "TRAVEL",
        "BEAUTY",
        "SEASONAL_CHRISTMAS",
        "SELFIE",
    ] {
        assert!(keys.contains(&required), "missing category {}", required);
    }
}

#[test]
fn test_lookup_is_case_and_separator_insensitive() {
    assert_eq!(category_defaults("seasonal christmas").key, "SEASONAL_CHRISTMAS");
    assert_eq!(category_defaults("Seasonal-Christmas").key, "SEASONAL_CHRISTMAS");
    assert_eq!(category_defaults("  wellness ").key, "WELLNESS");
}

#[test]
fn test_unknown_category_falls_back_to_general() {
    let defaults = category_defaults("UNDERWATER_BASKET_WEAVING");
    assert_eq!(defaults.key, "GENERAL");
    assert_eq!(defaults, &GENERAL_DEFAULTS);
}

#[test]
fn test_empty_category_falls_back_to_general() {
    assert_eq!(category_defaults("").key, "GENERAL");
}

#[test]
fn test_christmas_defaults_are_festive() {
    let defaults = category_defaults("SEASONAL_CHRISTMAS");
    assert!(defaults.mood_keywords.contains(&"festive"));
    assert!(defaults.mood_keywords.contains(&"cozy"));
}

#[test]
fn test_camera_leanings() {
    assert_eq!(category_defaults("LUXURY").camera_style, PhotographyStyle::Editorial);
    assert_eq!(category_defaults("SELFIE").camera_style, PhotographyStyle::Authentic);
}

#[test]
fn test_every_bundle_is_populated() {
    for key in known_categories() {
        let defaults = category_defaults(key);
        assert!(!defaults.mood_keywords.is_empty(), "{} has no mood keywords", key);
        assert!(!defaults.aesthetic.is_empty(), "{} has no aesthetic", key);
        assert!(!defaults.environment.is_empty(), "{} has no environment", key);
        assert!(
            !defaults.negative_instructions.is_empty(),
            "{} has no negative instructions",
            key
        );
    }
}

#[test]
fn test_universal_negative_instructions_cover_known_artifacts() {
    let joined = UNIVERSAL_NEGATIVE_INSTRUCTIONS.join(" ");
    for term in ["anatomy", "limbs", "logos", "over-sharpened", "cartoon"] {
        assert!(joined.contains(term), "missing universal negative: {}", term);
    }
}
