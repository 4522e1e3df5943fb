//! Small string helpers shared by the extractor, section builders and validator.

use regex::Regex;
use std::sync::LazyLock;

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append a period unless the text already ends in terminal punctuation.
pub fn ensure_terminal_punctuation(s: &str) -> String {
    let trimmed = s.trim_end().trim_end_matches([',', ';', ':']).trim_end();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Collapse runs of whitespace and trim dangling separators from both ends.
pub fn tidy(s: &str) -> String {
    let collapsed = MULTI_SPACE.replace_all(s.trim(), " ");
    collapsed
        .trim_matches(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .replace(" ,", ",")
}

/// Deduplicate case-insensitively, keeping first occurrences in order.
///
/// Entries fully contained in a longer entry are dropped as well, so
/// `["string lights", "Christmas tree with string lights"]` keeps only the
/// second.
pub fn dedupe_phrases(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = tidy(&item);
        if item.is_empty() {
            continue;
        }
        let lower = item.to_lowercase();
        if unique.iter().any(|u| u.to_lowercase() == lower) {
            continue;
        }
        unique.push(item);
    }

    let lowered: Vec<String> = unique.iter().map(|u| u.to_lowercase()).collect();
    unique
        .into_iter()
        .enumerate()
        .filter(|(i, _)| {
            !lowered
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && other.len() > lowered[*i].len() && other.contains(&lowered[*i]))
        })
        .map(|(_, item)| item)
        .collect()
}

/// Join a list as natural English: `a`, `a and b`, `a, b and c`.
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
