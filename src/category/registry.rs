//! Static category table and lookup.

use super::types::CategoryDefaults;
use crate::concept::PhotographyStyle;

/// Negative instructions applied to every category.
pub const UNIVERSAL_NEGATIVE_INSTRUCTIONS: &[&str] = &[
    "distorted anatomy or warped hands",
    "extra limbs or fingers",
    "cluttered or oversized logos",
    "over-sharpened, plastic-looking skin",
    "cartoon or illustration artifacts",
];

/// Bundle used for any category key that is not in the registry.
pub static GENERAL_DEFAULTS: CategoryDefaults = CategoryDefaults {
    key: "GENERAL",
    mood_keywords: &["natural", "authentic", "sophisticated"],
    aesthetic: "effortless, polished personal-brand photography",
    avoid_terms: &["stock-photo posing", "harsh flash"],
    environment: "a bright, modern interior with clean lines and soft neutral tones",
    color_story: "soft neutrals with one warm accent",
    lighting: "soft natural window light",
    visual_priority: "the subject's face and outfit",
    camera_style: PhotographyStyle::Authentic,
    negative_instructions: &["stiff stock-photo posing"],
};

static CATEGORY_REGISTRY: &[CategoryDefaults] = &[
    CategoryDefaults {
        key: "WELLNESS",
        mood_keywords: &["calm", "grounded", "restorative"],
        aesthetic: "clean, airy wellness editorial with organic textures",
        avoid_terms: &["clutter", "neon colors", "aggressive gym energy"],
        environment: "a serene, light-filled space with plants, linen and natural wood",
        color_story: "sage, oat and warm white",
        lighting: "diffused morning light",
        visual_priority: "ease in the body and a calm expression",
        camera_style: PhotographyStyle::Authentic,
        negative_instructions: &["sweaty or strained expressions", "cluttered props"],
    },
    CategoryDefaults {
        key: "LUXURY",
        mood_keywords: &["elevated", "confident", "refined"],
        aesthetic: "quiet-luxury editorial with rich materials",
        avoid_terms: &["flashy logos", "gaudy gold", "cheap-looking fabrics"],
        environment: "an elegant interior with marble, brass details and tailored furniture",
        color_story: "cream, camel, black and brushed gold",
        lighting: "soft directional light with gentle contrast",
        visual_priority: "fabric texture, posture and understated details",
        camera_style: PhotographyStyle::Editorial,
        negative_instructions: &["logo-heavy styling", "overly glossy retouching"],
    },
    CategoryDefaults {
        key: "LIFESTYLE",
        mood_keywords: &["relaxed", "warm", "authentic"],
        aesthetic: "candid lifestyle photography with lived-in details",
        avoid_terms: &["stiff posing", "empty staged rooms"],
        environment: "a sunlit, lived-in home with soft furnishings and personal touches",
        color_story: "warm neutrals with soft natural greens",
        lighting: "natural window light",
        visual_priority: "genuine expression and everyday context",
        camera_style: PhotographyStyle::Authentic,
        negative_instructions: &["stiff stock-photo posing"],
    },
    CategoryDefaults {
        key: "FASHION",
        mood_keywords: &["confident", "striking", "modern"],
        aesthetic: "street-style editorial with strong silhouettes",
        avoid_terms: &["mismatched proportions", "wrinkled garments"],
        environment: "a clean urban backdrop with architectural lines",
        color_story: "tonal outfit against a neutral city palette",
        lighting: "bright open shade",
        visual_priority: "the full outfit silhouette and fit",
        camera_style: PhotographyStyle::Editorial,
        negative_instructions: &["cropped-off shoes or garments", "wrinkled or ill-fitting clothing"],
    },
    CategoryDefaults {
        key: "TRAVEL",
        mood_keywords: &["adventurous", "carefree", "curious"],
        aesthetic: "sun-washed travel diary photography",
        avoid_terms: &["crowded tourist backgrounds", "postcard cliches"],
        environment: "a scenic destination with a recognizable sense of place",
        color_story: "sun-bleached tones with vivid local color",
        lighting: "warm late-afternoon sunlight",
        visual_priority: "the subject in relation to the destination",
        camera_style: PhotographyStyle::Authentic,
        negative_instructions: &["crowds or photobombing strangers"],
    },
    CategoryDefaults {
        key: "BEAUTY",
        mood_keywords: &["radiant", "fresh", "luminous"],
        aesthetic: "close, skin-first beauty photography",
        avoid_terms: &["heavy filters", "caked makeup"],
        environment: "a clean vanity or bathroom with soft reflective surfaces",
        color_story: "blush, ivory and soft gold",
        lighting: "soft, even beauty light",
        visual_priority: "skin texture, makeup and hair detail",
        camera_style: PhotographyStyle::Editorial,
        negative_instructions: &["airbrushed skin without texture", "smudged makeup"],
    },
    CategoryDefaults {
        key: "SEASONAL_CHRISTMAS",
        mood_keywords: &["festive", "cozy", "warm"],
        aesthetic: "warm holiday lifestyle photography with tasteful decor",
        avoid_terms: &["kitschy decorations", "overly red-and-green palettes"],
        environment: "a cozy living room decorated for the holidays",
        color_story: "deep red, forest green, cream and warm gold",
        lighting: "warm ambient glow from string lights",
        visual_priority: "the subject framed by seasonal details",
        camera_style: PhotographyStyle::Authentic,
        negative_instructions: &["tacky novelty costumes", "cluttered piles of decorations"],
    },
    CategoryDefaults {
        key: "SELFIE",
        mood_keywords: &["playful", "candid", "confident"],
        aesthetic: "casual phone-camera selfie with real-life texture",
        avoid_terms: &["studio perfection", "professional lighting rigs"],
        environment: "an everyday spot such as a mirror corner or sunny window",
        color_story: "true-to-life color",
        lighting: "natural daylight",
        visual_priority: "the face and expression",
        camera_style: PhotographyStyle::Authentic,
        negative_instructions: &["a visible phone distorting the face", "fisheye distortion"],
    },
];

/// Normalize a category key: trim, uppercase, spaces and hyphens to `_`.
pub fn normalize_category_key(category: &str) -> String {
    category
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Look up a category's defaults. Unknown keys resolve to [`GENERAL_DEFAULTS`].
pub fn category_defaults(category: &str) -> &'static CategoryDefaults {
    let key = normalize_category_key(category);
    CATEGORY_REGISTRY
        .iter()
        .find(|defaults| defaults.key == key)
        .unwrap_or(&GENERAL_DEFAULTS)
}

/// Every registered category key, in registry order.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_REGISTRY.iter().map(|defaults| defaults.key)
}
