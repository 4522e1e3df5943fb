use super::*;

const CHRISTMAS_LOFT: &str = "Christmas morning scene, wearing a red Ganni sweater, cream wide-leg trousers, and white sneakers, sitting on a leather sofa in an industrial loft with exposed brick walls, a minimalist Christmas tree with string lights, warm contrast lighting.";

// =========================================================================
// Full extraction
// =========================================================================

#[test]
fn test_extract_christmas_loft_scene() {
    let scene = extract_scene(CHRISTMAS_LOFT);

    assert_eq!(
        scene.outfit_complete,
        "a red Ganni sweater, cream wide-leg trousers, and white sneakers"
    );
    assert_eq!(
        scene.outfit_items,
        vec!["red Ganni sweater", "cream wide-leg trousers", "white sneakers"]
    );
    assert_eq!(scene.outfit_brands, vec!["Ganni"]);

    assert_eq!(scene.posture, "sitting");
    assert_eq!(
        scene.action,
        "sitting on a leather sofa in an industrial loft with exposed brick walls"
    );
    assert!(scene.activity.is_empty());

    assert_eq!(scene.location, "industrial loft");
    assert_eq!(
        scene.location_details,
        "industrial loft with exposed brick walls"
    );
    assert_eq!(scene.props, vec!["leather sofa"]);
    assert_eq!(scene.decor, vec!["minimalist Christmas tree with string lights"]);
    assert_eq!(scene.architecture, vec!["exposed brick walls"]);

    assert_eq!(scene.lighting, "warm contrast lighting");
    assert_eq!(scene.season, "christmas");
    assert_eq!(scene.time_of_day, "morning");
}

#[test]
fn test_extract_is_deterministic() {
    assert_eq!(extract_scene(CHRISTMAS_LOFT), extract_scene(CHRISTMAS_LOFT));
}

#[test]
fn test_no_wearing_clause_leaves_outfit_empty() {
    let scene = extract_scene("Standing on a sunny balcony with a cup of coffee.");
    assert!(!scene.has_outfit());
    assert!(scene.outfit_items.is_empty());
    assert!(scene.outfit_brands.is_empty());
    assert_eq!(scene.posture, "standing");
}

#[test]
fn test_empty_description() {
    let scene = extract_scene("");
    assert_eq!(scene, SceneElements::default());
}

#[test]
fn test_truncated_description_does_not_fail() {
    let scene = extract_scene("wearing a cream cardigan and jeans, sitting in a cozy caf");
    assert_eq!(scene.outfit_items, vec!["cream cardigan and jeans"]);
    assert_eq!(scene.posture, "sitting");
    // "caf" is not a place noun; the location stays empty.
    assert!(scene.location.is_empty());
}

// =========================================================================
// Outfit pass
// =========================================================================

#[test]
fn test_outfit_stops_at_with_clause() {
    let outfit = extract_outfit("wearing a black blazer with gold jewelry").unwrap();
    assert_eq!(outfit.complete, "a black blazer");
    assert_eq!(outfit.items, vec!["black blazer"]);
}

#[test]
fn test_outfit_stops_at_location_clause() {
    let outfit = extract_outfit("She is wearing a linen dress in a sunlit kitchen.").unwrap();
    assert_eq!(outfit.complete, "a linen dress");
}

#[test]
fn test_outfit_stops_at_sentence_end() {
    let outfit = extract_outfit("Wearing Zara wide-leg jeans. Golden hour outside.").unwrap();
    assert_eq!(outfit.items, vec!["Zara wide-leg jeans"]);
    assert_eq!(outfit.brands, vec!["Zara"]);
}

#[test]
fn test_outfit_missing() {
    assert!(extract_outfit("sitting by the window").is_none());
    assert!(extract_outfit("wearing ").is_none());
}

#[test]
fn test_outfit_brands_deduplicated_in_order() {
    let outfit = extract_outfit("wearing a COS shirt, Ganni skirt, plus a COS belt").unwrap();
    assert_eq!(outfit.brands, vec!["COS", "Ganni"]);
    assert_eq!(outfit.items, vec!["COS shirt", "Ganni skirt", "COS belt"]);
}

#[test]
fn test_outfit_list_shapes_keep_every_item() {
    let cases: [(&str, &[&str]); 4] = [
        (
            "wearing black jeans, a white tee, and Dr. Martens boots, standing by the door",
            &["black jeans", "white tee", "Dr. Martens boots"],
        ),
        (
            "wearing a linen shirt, navy shorts plus leather sandals while walking along the harbor",
            &["linen shirt", "navy shorts", "leather sandals"],
        ),
        (
            "Wearing a St. John knit set, pearl earrings, and loafers. Soft window light.",
            &["St. John knit set", "pearl earrings", "loafers"],
        ),
        (
            "wearing a red Ganni sweater, cream wide-leg trousers, and white sneakers, sitting on a sofa",
            &["red Ganni sweater", "cream wide-leg trousers", "white sneakers"],
        ),
    ];

    for (description, expected) in cases {
        let outfit = extract_outfit(description).unwrap();
        assert_eq!(outfit.items, expected.to_vec(), "{description}");
        for item in expected {
            assert!(
                outfit.complete.contains(item),
                "{item:?} missing from {:?}",
                outfit.complete
            );
        }
    }
}

#[test]
fn test_outfit_brands_that_are_common_words_need_capitals() {
    let outfit = extract_outfit("wearing a mango silk slip dress").unwrap();
    assert!(outfit.brands.is_empty());

    let outfit = extract_outfit("wearing a Mango silk slip dress").unwrap();
    assert_eq!(outfit.brands, vec!["Mango"]);

    let outfit = extract_outfit("wearing the row of pearls from her cos-style tee").unwrap();
    assert!(outfit.brands.is_empty());

    let outfit = extract_outfit("wearing a ganni cardigan").unwrap();
    assert_eq!(outfit.brands, vec!["Ganni"]);
}

#[test]
fn test_outfit_article_kept_when_part_of_brand() {
    let outfit = extract_outfit("wearing The Row loafers, a Loewe bag").unwrap();
    assert_eq!(outfit.items, vec!["The Row loafers", "Loewe bag"]);
    assert_eq!(outfit.brands, vec!["The Row", "Loewe"]);
}

// =========================================================================
// Posture and activity
// =========================================================================

#[test]
fn test_posture_and_action() {
    let text = "Leaning against a marble counter, holding a latte.";
    assert_eq!(extract_posture(text).as_deref(), Some("leaning"));
    assert_eq!(
        extract_action(text).as_deref(),
        Some("Leaning against a marble counter")
    );
    assert_eq!(extract_activity(text).as_deref(), Some("holding a latte"));
}

#[test]
fn test_no_posture() {
    assert!(extract_posture("a quiet afternoon").is_none());
    assert!(extract_action("a quiet afternoon").is_none());
}

// =========================================================================
// Location and furniture
// =========================================================================

#[test]
fn test_descriptive_location_without_details() {
    let location = extract_location("reading in a cozy cabin, snow outside").unwrap();
    assert_eq!(location.location, "cozy cabin");
    assert_eq!(location.details, "cozy cabin");
}

#[test]
fn test_plain_location_fallback() {
    let location = extract_location("standing in the kitchen").unwrap();
    assert_eq!(location.location, "kitchen");
    assert_eq!(location.details, "kitchen");
}

#[test]
fn test_no_location() {
    assert!(extract_location("smiling at the camera").is_none());
}

#[test]
fn test_furniture_phrase() {
    assert_eq!(
        extract_furniture("curled up on a velvet armchair").as_deref(),
        Some("velvet armchair")
    );
    assert!(extract_furniture("walking through the park").is_none());
}

// =========================================================================
// Detail vocabularies
// =========================================================================

#[test]
fn test_architecture_in_order() {
    let found = extract_architecture("high ceilings, exposed brick walls and floor-to-ceiling windows");
    assert_eq!(
        found,
        vec!["high ceilings", "exposed brick walls", "floor-to-ceiling windows"]
    );
}

#[test]
fn test_decor_deduplicates_contained_phrases() {
    let found = extract_decor("string lights, lit candles and fairy lights, candles everywhere");
    assert_eq!(found, vec!["string lights", "lit candles", "fairy lights"]);
}

#[test]
fn test_props() {
    let found = extract_props("a laptop, a cup of coffee and a croissant");
    assert_eq!(found, vec!["laptop", "cup of coffee", "croissant"]);
}

// =========================================================================
// Atmosphere
// =========================================================================

#[test]
fn test_lighting_capture() {
    assert_eq!(
        extract_lighting("bathed in soft golden light").as_deref(),
        Some("soft golden light")
    );
    assert_eq!(extract_lighting("by candlelight").as_deref(), Some("candlelight"));
    assert!(extract_lighting("a bright idea").is_none());
}

#[test]
fn test_mood_and_vibe() {
    assert_eq!(extract_mood("a Cozy evening").as_deref(), Some("cozy"));
    assert_eq!(
        extract_vibe("with a relaxed weekend vibe").as_deref(),
        Some("relaxed weekend")
    );
    assert!(extract_vibe("no mood words here").is_none());
}

#[test]
fn test_season_normalization() {
    assert_eq!(extract_season("Xmas eve").as_deref(), Some("christmas"));
    assert_eq!(extract_season("a snowy street").as_deref(), Some("winter"));
    assert_eq!(extract_season("late summer").as_deref(), Some("summer"));
    assert!(extract_season("an ordinary day").is_none());
}

#[test]
fn test_time_of_day_normalization() {
    assert_eq!(extract_time_of_day("at sunrise").as_deref(), Some("morning"));
    assert_eq!(extract_time_of_day("golden hour walk").as_deref(), Some("evening"));
    assert_eq!(extract_time_of_day("late at night").as_deref(), Some("night"));
    assert_eq!(extract_time_of_day("afternoon tea").as_deref(), Some("afternoon"));
}

#[test]
fn test_location_phrase_prefers_details() {
    let scene = SceneElements {
        location: "loft".to_string(),
        location_details: "loft with high ceilings".to_string(),
        ..Default::default()
    };
    assert_eq!(scene.location_phrase(), "loft with high ceilings");

    let bare = SceneElements {
        location: "loft".to_string(),
        ..Default::default()
    };
    assert_eq!(bare.location_phrase(), "loft");
}
