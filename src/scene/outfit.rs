//! Outfit extraction: the phrase after "wearing".

use super::vocabulary::{LOCATION_ADJECTIVES, LOCATION_NOUNS, POSTURES};
use crate::brands::all_known_brands;
use crate::text::{dedupe_phrases, tidy};
use regex::Regex;
use std::sync::LazyLock;

static WEARING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwearing\s+").expect("Invalid wearing regex"));

/// Where the outfit phrase stops: a posture verb, "with", a location clause,
/// or the end of the sentence.
static OUTFIT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i),?\s+(?:while\s+|and\s+)?(?:{postures})\b|\s+with\s+|,?\s+(?:in|at|inside|on)\s+(?:a|an|the)\s+(?:(?:{adjectives})|(?:{nouns}))\b|[.!?;](?:\s|$)|\n",
        postures = POSTURES,
        adjectives = LOCATION_ADJECTIVES,
        nouns = LOCATION_NOUNS,
    ))
    .expect("Invalid outfit boundary regex")
});

/// Title abbreviations whose period does not end the outfit phrase
/// ("Dr. Martens", "St. John").
const ABBREVIATIONS: &[&str] = &["dr", "st", "mr", "mrs", "ms", "jr", "sr", "no"];

static ITEM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*,\s*(?:and\s+|plus\s+)?|\s+plus\s+").expect("Invalid item separator regex")
});

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:and|a|an|the|her|his|their|some)\s+").expect("Invalid article regex")
});

/// Brand names that are also ordinary words. These only match when each word
/// is capitalized, so "a mango slip dress" is not a Mango piece.
const COMMON_WORD_BRANDS: &[&str] = &["Mango", "COS", "The Row", "Reformation", "Set Active"];

static BRAND_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    all_known_brands()
        .map(|brand| {
            let name = if COMMON_WORD_BRANDS.contains(&brand) {
                capitalized_pattern(brand)
            } else {
                format!("(?i:{})", regex::escape(brand))
            };
            let pattern = format!(r"(?:^|[^\w]){}(?:$|[^\w])", name);
            (brand, Regex::new(&pattern).expect("Invalid brand regex"))
        })
        .collect()
});

/// Outfit pass result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitMatch {
    /// The captured phrase, verbatim apart from trimming.
    pub complete: String,
    pub items: Vec<String>,
    pub brands: Vec<String>,
}

/// Capture the outfit phrase following "wearing".
///
/// Returns `None` when the description has no "wearing" clause or the clause
/// is empty.
pub fn extract_outfit(description: &str) -> Option<OutfitMatch> {
    let start = WEARING.find(description)?.end();
    let rest = &description[start..];
    let end = OUTFIT_BOUNDARY
        .find_iter(rest)
        .find(|m| !is_abbreviation_period(rest, m.start(), m.as_str()))
        .map(|m| m.start())
        .unwrap_or(rest.len());

    let complete = tidy(rest[..end].trim_end_matches(['.', ',', ';', '!', '?']));
    if complete.is_empty() {
        return None;
    }

    let items: Vec<String> = ITEM_SEPARATOR
        .split(&complete)
        .map(|item| strip_article(item.trim()))
        .filter(|item| !item.is_empty())
        .collect();

    let brands = find_brands(&complete);

    Some(OutfitMatch {
        complete,
        items,
        brands,
    })
}

/// `The Row` becomes `T(?i:he) R(?i:ow)`: first letters fixed uppercase, the
/// rest of each word in any case.
fn capitalized_pattern(brand: &str) -> String {
    brand
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let rest = chars.as_str();
                    let first = regex::escape(&first.to_uppercase().to_string());
                    if rest.is_empty() {
                        first
                    } else {
                        format!("{}(?i:{})", first, regex::escape(rest))
                    }
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a boundary match is the period of an abbreviation such as "Dr.".
fn is_abbreviation_period(text: &str, start: usize, matched: &str) -> bool {
    if !matched.starts_with('.') {
        return false;
    }
    let word = text[..start]
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    ABBREVIATIONS.iter().any(|a| a.eq_ignore_ascii_case(word))
}

/// Drop a leading article unless it belongs to a brand name ("The Row").
fn strip_article(item: &str) -> String {
    let stripped = LEADING_ARTICLE.replace(item, "");
    if find_brands(&stripped).len() < find_brands(item).len() {
        item.to_string()
    } else {
        stripped.trim().to_string()
    }
}

/// Known brand names mentioned in `text`, deduplicated, in first-seen order.
fn find_brands(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, &'static str)> = BRAND_PATTERNS
        .iter()
        .filter_map(|(brand, regex)| regex.find(text).map(|m| (m.start(), *brand)))
        .collect();
    found.sort_by_key(|(position, _)| *position);

    dedupe_phrases(found.into_iter().map(|(_, brand)| brand.to_string()).collect())
}
