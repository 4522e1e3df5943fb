//! Sentence splitting and word-overlap similarity.

use std::collections::HashSet;

/// Split text on `.`, `!` and `?`, dropping empty and whitespace-only fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn words(sentence: &str) -> HashSet<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Word-overlap similarity: `|common words| / max(|words a|, |words b|)`.
///
/// Returns 0.0 when either side has no words, so two empty fragments are not
/// treated as identical.
pub fn sentence_similarity(a: &str, b: &str) -> f64 {
    let words_a = words(a);
    let words_b = words(b);
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }
    let longest = words_a.len().max(words_b.len());
    let common = words_a.intersection(&words_b).count();
    common as f64 / longest as f64
}
