//! Rule-based brand selection.

use super::pools::{LUXURY_BRANDS, all_known_brands, pool_for};
use super::random::RandomSource;
use crate::category::normalize_category_key;
use crate::theme::Theme;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The outfit brand-mixing rule: at most one luxury hero piece.
pub const MIXED_BRAND_RULE: &str = "one-luxury-hero-max";

/// Brand used if a pool somehow yields nothing usable.
const FALLBACK_BRAND: &str = "Zara";

static LUXURY_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:luxury|luxurious|sophisticated|elevated|chic|upscale|high-end|designer|refined|opulent|glamorous|polished)\b",
    )
    .expect("Invalid luxury signal regex")
});

/// Result of brand selection.
///
/// Construct through [`BrandSelection::new`], which enforces one or two
/// accessible brands and at most one luxury accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSelection {
    pub accessible: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luxury: Option<String>,
}

impl BrandSelection {
    pub fn new<I, S>(accessible: I, luxury: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut brands: Vec<String> = Vec::with_capacity(2);
        for brand in accessible {
            let brand: String = brand.into();
            let brand = brand.trim().to_string();
            if brand.is_empty() || brands.iter().any(|b| b.eq_ignore_ascii_case(&brand)) {
                continue;
            }
            brands.push(brand);
            if brands.len() == 2 {
                break;
            }
        }
        if brands.is_empty() {
            brands.push(FALLBACK_BRAND.to_string());
        }

        let luxury = luxury
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Self {
            accessible: brands,
            luxury,
        }
    }

    /// Put the concept's own brand references ahead of the rotated picks.
    ///
    /// Only names the pools know are used, in their canonical spelling.
    /// Referenced accessible brands take the first slots; a referenced luxury
    /// brand replaces the accent. The 1–2 accessible and single luxury limits
    /// still apply.
    pub fn with_references(self, references: &[String]) -> Self {
        let known: Vec<&'static str> = references
            .iter()
            .filter_map(|reference| canonical_brand(reference))
            .collect();
        if known.is_empty() {
            return self;
        }

        let (luxury_refs, accessible_refs): (Vec<&str>, Vec<&str>) =
            known.into_iter().partition(|b| LUXURY_BRANDS.contains(b));

        let accessible = accessible_refs
            .into_iter()
            .map(str::to_string)
            .chain(self.accessible);
        let luxury = luxury_refs
            .first()
            .map(|b| b.to_string())
            .or(self.luxury);

        let selection = Self::new(accessible, luxury);
        tracing::debug!(
            accessible = ?selection.accessible,
            luxury = ?selection.luxury,
            "applied brand references"
        );
        selection
    }

    /// All selected brands, accessible first.
    pub fn all(&self) -> Vec<&str> {
        self.accessible
            .iter()
            .map(String::as_str)
            .chain(self.luxury.as_deref())
            .collect()
    }
}

fn canonical_brand(name: &str) -> Option<&'static str> {
    let name = name.trim();
    all_known_brands().find(|known| known.eq_ignore_ascii_case(name))
}

/// Whether free text carries a luxury signal keyword.
pub fn has_luxury_signal(text: &str) -> bool {
    LUXURY_SIGNAL.is_match(text)
}

/// Select accessible brands and an optional luxury accent.
///
/// A luxury accent is added when the theme is `Luxury`, the category is
/// `LUXURY`, or the user's request contains a luxury signal keyword.
pub fn select_brands<R: RandomSource + ?Sized>(
    category: &str,
    theme: Theme,
    user_request: Option<&str>,
    rng: &mut R,
) -> BrandSelection {
    let pool = pool_for(category, theme);
    let set = pool.candidates[rng.pick(pool.candidates.len())];

    let wants_luxury = theme == Theme::Luxury
        || normalize_category_key(category) == "LUXURY"
        || user_request.is_some_and(has_luxury_signal);

    let luxury = wants_luxury.then(|| LUXURY_BRANDS[rng.pick(LUXURY_BRANDS.len())].to_string());

    tracing::debug!(
        pool = pool.name,
        accessible = ?set,
        luxury = ?luxury,
        "selected brands"
    );

    BrandSelection::new(set.iter().copied(), luxury)
}
