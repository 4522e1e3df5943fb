//! Architecture, decor and prop vocabularies.
//!
//! Each list is a set of independent patterns. Every match is collected and
//! the list is deduplicated afterwards, so overlapping patterns are harmless.

use crate::text::dedupe_phrases;
use regex::Regex;
use std::sync::LazyLock;

const ARCHITECTURE_PATTERNS: &[&str] = &[
    r"exposed brick(?: walls?)?",
    r"floor-to-ceiling windows",
    r"marble (?:surfaces|countertops?|counters?|floors?|walls|kitchen island)",
    r"high ceilings",
    r"arched (?:windows|doorways?)",
    r"(?:wooden|exposed|oak) beams",
    r"herringbone (?:floors|flooring|parquet)",
    r"(?:large|tall|oversized|panoramic|bay) windows?",
    r"concrete (?:walls|floors)",
    r"crown molding",
    r"(?:stone |brick |marble )?fireplace",
    r"city lights",
    r"city skyline",
    r"skyline views?",
    r"white-?washed walls",
    r"(?:wooden|oak|hardwood) floors",
];

const DECOR_PATTERNS: &[&str] = &[
    r"(?:(?:minimalist|small|tall|large|decorated|elegant|flocked|white|modern|scandinavian|frosted|twinkling|lit|real|potted|tabletop|slim)\s+){0,2}christmas tree(?:\s+with\s+(?:(?:warm|white|twinkling|string|fairy|soft|golden|gold)\s+){0,2}(?:lights|ornaments|baubles))?",
    r"(?:(?:warm|white|twinkling|soft)\s+)?(?:string|fairy|twinkle) lights",
    r"(?:(?:pine|eucalyptus|fresh|evergreen)\s+)?garlands?",
    r"(?:(?:lit|flickering|scented|pillar|taper)\s+)?candles",
    r"(?:(?:eucalyptus|pine|dried)\s+)?wreath",
    r"(?:(?:glass|gold|red)\s+)?ornaments",
    r"stockings",
    r"(?:fresh|dried) flowers",
    r"vase of [a-z]+",
    r"throw pillows",
    r"(?:chunky |cable-)?knit (?:blanket|throw)",
    r"coffee table books",
    r"pampas grass",
    r"potted plants?",
    r"(?:linen|velvet|wool|cashmere|leather|boucle|bouclé|silk|wood|stone|marble|brass|rattan) and (?:linen|velvet|wool|cashmere|leather|boucle|bouclé|silk|wood|stone|marble|brass|rattan) textures?",
];

const PROP_PATTERNS: &[&str] = &[
    r"(?:coffee|tea) (?:cup|mug)",
    r"cup of (?:coffee|tea|cocoa)",
    r"mug of [a-z]+(?: [a-z]+)?",
    r"(?:iced |matcha |oat milk )?latte",
    r"cappuccino",
    r"hot cocoa",
    r"laptop",
    r"(?:open |hardcover )?book",
    r"journal",
    r"notebook",
    r"dumbbells",
    r"kettlebell",
    r"water bottle",
    r"shopping bags",
    r"(?:wrapped )?gift boxes",
    r"wrapped (?:gifts|presents)",
    r"glass of (?:champagne|wine|prosecco)",
    r"(?:champagne|wine) glass",
    r"suitcase",
    r"passport",
    r"croissants?",
    r"bouquet of [a-z]+",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!(r"(?i)\b(?:{})\b", pattern)).expect("Invalid scene detail regex")
        })
        .collect()
}

static ARCHITECTURE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(ARCHITECTURE_PATTERNS));
static DECOR: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(DECOR_PATTERNS));
static PROPS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(PROP_PATTERNS));

fn collect(patterns: &[Regex], description: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = patterns
        .iter()
        .flat_map(|regex| regex.find_iter(description))
        .map(|m| (m.start(), m.as_str().to_string()))
        .collect();
    found.sort_by_key(|(position, _)| *position);

    dedupe_phrases(found.into_iter().map(|(_, phrase)| phrase).collect())
}

/// Architectural features, in order of appearance.
pub fn extract_architecture(description: &str) -> Vec<String> {
    collect(&ARCHITECTURE, description)
}

/// Decor items, in order of appearance.
pub fn extract_decor(description: &str) -> Vec<String> {
    collect(&DECOR, description)
}

/// Hand-held and tabletop props, in order of appearance.
pub fn extract_props(description: &str) -> Vec<String> {
    collect(&PROPS, description)
}
