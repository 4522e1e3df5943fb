//! Static brand lists.

use crate::category::normalize_category_key;
use crate::theme::Theme;

/// A named pool of candidate brand sets. Each set holds one or two brands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPool {
    pub name: &'static str,
    pub candidates: &'static [&'static [&'static str]],
}

static ATHLETIC: BrandPool = BrandPool {
    name: "athletic",
    candidates: &[
        &["Alo Yoga"],
        &["Lululemon", "Vuori"],
        &["Girlfriend Collective", "Nike"],
        &["Set Active"],
    ],
};

static SWIM: BrandPool = BrandPool {
    name: "swim",
    candidates: &[
        &["Hunza G"],
        &["Faithfull the Brand", "Mango"],
        &["Solid & Striped", "Zara"],
    ],
};

static HOLIDAY: BrandPool = BrandPool {
    name: "holiday",
    candidates: &[
        &["Ganni", "& Other Stories"],
        &["Sezane"],
        &["COS", "Arket"],
        &["J.Crew", "Madewell"],
    ],
};

static ELEVATED_BASICS: BrandPool = BrandPool {
    name: "elevated_basics",
    candidates: &[
        &["COS", "Massimo Dutti"],
        &["Reformation"],
        &["Arket", "& Other Stories"],
    ],
};

static FASHION: BrandPool = BrandPool {
    name: "fashion",
    candidates: &[&["Zara", "COS"], &["Mango", "& Other Stories"], &["Ganni"]],
};

static TRAVEL: BrandPool = BrandPool {
    name: "travel",
    candidates: &[
        &["Everlane", "Madewell"],
        &["Uniqlo", "Arket"],
        &["Sezane"],
    ],
};

static EVERYDAY: BrandPool = BrandPool {
    name: "everyday",
    candidates: &[
        &["Zara", "H&M"],
        &["Madewell"],
        &["Everlane", "Uniqlo"],
        &["Mango"],
    ],
};

/// Luxury accent brands. At most one is ever chosen per outfit.
pub const LUXURY_BRANDS: &[&str] = &[
    "Bottega Veneta",
    "The Row",
    "Loewe",
    "Khaite",
    "Toteme",
    "Celine",
    "Hermes",
    "Cartier",
];

static ALL_POOLS: &[&BrandPool] = &[
    &ATHLETIC,
    &SWIM,
    &HOLIDAY,
    &ELEVATED_BASICS,
    &FASHION,
    &TRAVEL,
    &EVERYDAY,
];

/// Choose the accessible pool for a category and theme.
///
/// Theme rules take precedence over category rules because the theme
/// describes this particular scene.
pub fn pool_for(category: &str, theme: Theme) -> &'static BrandPool {
    match theme {
        Theme::Workout => return &ATHLETIC,
        Theme::Beach => return &SWIM,
        Theme::Christmas => return &HOLIDAY,
        Theme::Travel => return &TRAVEL,
        _ => {}
    }

    match normalize_category_key(category).as_str() {
        "WELLNESS" => &ATHLETIC,
        "SEASONAL_CHRISTMAS" => &HOLIDAY,
        "LUXURY" | "BEAUTY" => &ELEVATED_BASICS,
        "FASHION" => &FASHION,
        "TRAVEL" => &TRAVEL,
        _ => &EVERYDAY,
    }
}

/// Every brand name known to the pools, accessible and luxury.
///
/// Used by the scene extractor to recognize brand names in outfit text.
pub fn all_known_brands() -> impl Iterator<Item = &'static str> {
    ALL_POOLS
        .iter()
        .flat_map(|pool| pool.candidates.iter())
        .flat_map(|set| set.iter().copied())
        .chain(LUXURY_BRANDS.iter().copied())
}
